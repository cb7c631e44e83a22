fn main() {
    // Embed Windows icon
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("neonfolio.ico");
        res.compile().unwrap();
    }
}
