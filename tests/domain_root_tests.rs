use site_sniffer::get_domain_root;

#[cfg(test)]
mod domain_root_tests {
    use super::*;

    #[test]
    fn test_www_and_tld_are_stripped() {
        assert_eq!(get_domain_root("https://www.ford.com/suvs"), "ford");
    }

    #[test]
    fn test_subdomain_and_compound_tld() {
        assert_eq!(get_domain_root("https://shop.ford.co.uk"), "ford");
    }

    #[test]
    fn test_bare_host_is_returned_as_is() {
        assert_eq!(get_domain_root("localhost"), "localhost");
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        assert_eq!(get_domain_root("  HTTPS://WWW.Toyota.COM/Camry "), "toyota");
    }

    #[test]
    fn test_unknown_tld_is_kept() {
        // Not a public suffix lookup; unknown TLD labels win
        assert_eq!(get_domain_root("https://www.bmw.ca"), "ca");
    }

    #[test]
    fn test_reapplying_to_the_root_is_stable() {
        let urls = [
            "https://www.ford.com/suvs",
            "https://shop.ford.co.uk",
            "http://developer.apple.com/xcode",
            "https://www.brother-usa.com/printers",
            "https://localhost:8080",
            "https://api.example.io/v1?x=1",
        ];

        for url in urls {
            let root = get_domain_root(url);
            assert_eq!(
                get_domain_root(&format!("https://{}", root)),
                root,
                "{} is not a fixed point",
                url
            );
        }
    }
}
