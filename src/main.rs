fn main() {
    dioxus::launch(admin_sidebar::App);
}
