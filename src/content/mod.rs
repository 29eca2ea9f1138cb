//! Static portfolio content.
//!
//! Everything shown on the page is a fixed literal list sourced once at
//! startup. Quotes may be replaced from the config file.

mod contact;
mod profile;
mod projects;
mod quotes;
mod skills;

pub use contact::{contact_items, social_profiles, ContactItem, SocialProfile};
pub use profile::{Profile, PROFILE};
pub use projects::{projects, Project};
pub use quotes::{inspirational_quotes, parse_plain_quote, plain_quotes, portrait_quotes, random_quote};
pub use skills::{experience_highlights, skill_categories, Skill, SkillCategory};
