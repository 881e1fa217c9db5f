use hero_core::nav::*;

#[test]
fn five_groups_in_order() {
    let names: Vec<&str> = LINKS.iter().map(|l| l.name).collect();
    assert_eq!(names, ["Build", "Explore", "Community", "About", "Socials"]);
    let tags: Vec<&str> = LINKS.iter().map(|l| l.analytics).collect();
    assert_eq!(tags, ["build", "explore", "community", "about", "socials"]);
}

#[test]
fn group_contents() {
    assert_eq!(LINKS[0].href, "/getstarted");
    assert_eq!(LINKS[0].sub_items.len(), 7);
    assert_eq!(LINKS[0].sub_items[0].name, "Get Started");
    assert_eq!(LINKS[1].sub_items.len(), 2);
    assert_eq!(LINKS[4].href, "#socials");
    assert_eq!(LINKS[4].sub_items[3].name, "Discord");
}

#[test]
fn external_links_are_detected() {
    assert!(is_external("https://docs.base.org"));
    assert!(!is_external("/ecosystem"));
    assert!(!is_external("#socials"));
}

#[test]
fn logo_image() {
    assert_eq!(NAV_LOGO_SRC, "/three-hero/logo.svg");
    assert_eq!(NAV_LOGO_ALT, "Base Logo");
    assert_eq!(NAV_LOGO_SIZE_PX, 50);
}
