fn main() {
    photoblog::mount();
}
