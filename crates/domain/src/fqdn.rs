/// Normalizes a domain name to the form used as a key in the answers store:
/// ASCII-lowercased and dot-terminated. The empty name becomes the root (`.`).
pub fn normalize_fqdn(name: &str) -> String {
    let trimmed = name.trim();
    let mut fqdn = String::with_capacity(trimmed.len() + 1);
    fqdn.extend(trimmed.chars().map(|c| c.to_ascii_lowercase()));
    if !fqdn.ends_with('.') {
        fqdn.push('.');
    }
    fqdn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_trailing_dot() {
        assert_eq!(normalize_fqdn("mysql"), "mysql.");
        assert_eq!(normalize_fqdn("db.rancher.internal"), "db.rancher.internal.");
    }

    #[test]
    fn test_keeps_existing_trailing_dot() {
        assert_eq!(normalize_fqdn("mysql."), "mysql.");
    }

    #[test]
    fn test_lowercases_ascii() {
        assert_eq!(normalize_fqdn("WWW.Example.COM"), "www.example.com.");
    }

    #[test]
    fn test_empty_is_root() {
        assert_eq!(normalize_fqdn(""), ".");
        assert_eq!(normalize_fqdn("."), ".");
    }
}
