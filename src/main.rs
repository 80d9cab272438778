fn main() {
    care_portal_pwa::run();
}
