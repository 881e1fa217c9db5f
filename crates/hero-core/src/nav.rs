//! Static link table for the top navigation bar.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubItem {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    pub sub_items: &'static [SubItem],
    /// Value of the `data-analytics` attribute on every anchor of the group.
    pub analytics: &'static str,
}

const fn item(name: &'static str, href: &'static str) -> SubItem {
    SubItem { name, href }
}

pub const NAV_LOGO_SRC: &str = "/three-hero/logo.svg";
pub const NAV_LOGO_ALT: &str = "Base Logo";
pub const NAV_LOGO_SIZE_PX: u32 = 50;
pub const NAV_CONNECT_LABEL: &str = "Connect";

pub static LINKS: [NavLink; 5] = [
    NavLink {
        name: "Build",
        href: "/getstarted",
        analytics: "build",
        sub_items: &[
            item("Get Started", "/getstarted"),
            item("Docs", "https://docs.base.org"),
            item("Learn", "https://docs.base.org/base-learn/docs/welcome"),
            item("Status Page", "https://status.base.org"),
            item("Block Explorer", "https://base.blockscout.com"),
            item("Bug Bounty", "https://hackerone.com/coinbase"),
            item("Github", "https://github.com/base-org"),
        ],
    },
    NavLink {
        name: "Explore",
        href: "/ecosystem",
        analytics: "explore",
        sub_items: &[
            item("Apps", "/ecosystem"),
            item("Bridge", "https://bridge.base.org"),
        ],
    },
    NavLink {
        name: "Community",
        href: "/",
        analytics: "community",
        sub_items: &[
            item(
                "Grants",
                "https://paragraph.xyz/@grants.base.eth/calling-based-builders",
            ),
            item("Events", "https://lu.ma/BaseMeetups"),
        ],
    },
    NavLink {
        name: "About",
        href: "/about",
        analytics: "about",
        sub_items: &[
            item("Vision", "/about"),
            item("Blog", "https://base.mirror.xyz/"),
            item("Jobs", "/jobs"),
            item("Media Kit", "https://github.com/base-org/brand-kit"),
        ],
    },
    NavLink {
        name: "Socials",
        href: "#socials",
        analytics: "socials",
        sub_items: &[
            item("X", "https://x.com/base"),
            item("Farcaster", "https://warpcast.com/~/channel/base"),
            item("Github", "https://github.com/base-org"),
            item("Discord", "https://discord.com/invite/buildonbase"),
        ],
    },
];

/// Absolute http(s) links leave the site and open in a new tab.
pub fn is_external(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}
