// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/mortarboard.ico");
        res.set("FileDescription", "Admission cutoff lookup");
        res.compile().unwrap();
    }
}
