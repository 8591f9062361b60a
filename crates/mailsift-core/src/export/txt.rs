/// One email per line, no header.
pub fn render(emails: &[String]) -> Vec<u8> {
    let mut out = String::new();
    for email in emails {
        out.push_str(email);
        out.push('\n');
    }
    out.into_bytes()
}
