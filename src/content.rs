//! Fixed copy rendered on the landing page

pub const BRAND: &str = "UDM";
pub const NAV_LINKS: &[&str] = &["Home", "About Us", "Brands", "Ongoing Campaigns"];
pub const LOGIN: &str = "Login";
pub const GET_IN_TOUCH: &str = "Get in Touch";

pub const HERO_TITLE: &str = "Get in touch with us.";
pub const HERO_SUBTITLE: &str = "We're here to assist you.";

pub const SUBMIT_LABEL: &str = "✉ Leave us a Message";
pub const SUBMITTING_LABEL: &str = "Sending...";

/// Address copied to the clipboard by the copy shortcut
pub const SUPPORT_EMAIL: &str = "help@info.com";
pub const ASSISTANCE_HOURS: &str = "Assistance hours: Monday - Friday 6 am to 8 pm EST";

/// One entry of the contact info panel
pub struct InfoEntry {
    pub title: &'static str,
    pub value: &'static str,
}

pub const CONTACT_INFO_HEADING: &str = "We are always happy to assist you";
pub const CONTACT_INFO: &[InfoEntry] = &[
    InfoEntry {
        title: "✉ Email Address",
        value: SUPPORT_EMAIL,
    },
    InfoEntry {
        title: "☎ Phone Number",
        value: SUPPORT_EMAIL,
    },
];

pub const NEWSLETTER_HEADING: &str = "Subscribe to Our Plans";
pub const NEWSLETTER_BLURB: &str =
    "Get weekly updates about our product on your email, no spam guaranteed";
pub const SUBSCRIBE_LABEL: &str = "Subscribe";

/// A titled list of links in the footer
pub struct FooterColumn {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const FOOTER_BRAND: &str = "NEEMAN'S";
pub const FOOTER_TAGLINE: &str = "A trusted market agency";
pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "COMPANY",
        items: &[
            "About us",
            "Partner program",
            "Career",
            "Contact us",
            "Privacy Policy",
        ],
    },
    FooterColumn {
        title: "FEATURES",
        items: &[
            "Pricing",
            "Reviews",
            "Direct Mail Academy",
            "Success stories",
            "Terms & conditions",
        ],
    },
    FooterColumn {
        title: "CONTACT",
        items: &["support@postpilot.com", "Made with ❤️", "Facebook · Instagram · Twitter"],
    },
];
pub const COPYRIGHT: &str = "© 2024 UDM Inc. All rights reserved.";
pub const TRY_FOR_FREE: &str = "Try it for free";
