#[cfg(windows)]
fn main() {
    let mut res = winres::WindowsResource::new();
    res.set("FileDescription", "Calcforge Calculator Shell");
    res.set("ProductName", "Calcforge");
    res.set("LegalCopyright", "Copyright (C) 2026 Calcforge");
    if let Err(e) = res.compile() {
        eprintln!("winres compile warning: {e}");
    }
}

#[cfg(not(windows))]
fn main() {}
