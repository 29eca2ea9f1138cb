#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialProfile {
    pub name: &'static str,
    pub url: &'static str,
}

pub fn contact_items() -> &'static [ContactItem] {
    &[
        ContactItem {
            label: "Email",
            value: "harish.aiml@example.com",
            href: Some("mailto:harish.aiml@example.com"),
        },
        ContactItem {
            label: "GitHub",
            value: "github.com/harish-aiml",
            href: Some("https://github.com/harish-aiml"),
        },
        ContactItem {
            label: "LinkedIn",
            value: "linkedin.com/in/harish-aiml",
            href: Some("https://linkedin.com/in/harish-aiml"),
        },
        ContactItem {
            label: "Location",
            value: "Tamil Nadu, India",
            href: None,
        },
    ]
}

pub fn social_profiles() -> &'static [SocialProfile] {
    &[
        SocialProfile {
            name: "GitHub",
            url: "https://github.com/harish-username",
        },
        SocialProfile {
            name: "LinkedIn",
            url: "https://linkedin.com/in/harish-username",
        },
        SocialProfile {
            name: "Instagram",
            url: "https://instagram.com/harish_username",
        },
        SocialProfile {
            name: "Twitter",
            url: "https://twitter.com/harish_username",
        },
        SocialProfile {
            name: "YouTube",
            url: "https://youtube.com/@harish_channel",
        },
    ]
}
