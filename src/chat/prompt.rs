use crate::content::Profile;

/// System prompt describing the portfolio owner, with optional extra context.
pub fn system_prompt(profile: &Profile, context: &str) -> String {
    let name = title_case(profile.name);
    let mut prompt = format!(
        "You are an AI assistant for {name}'s portfolio. {name} is an {} ({}).\n\n\
         Key information about {name}:\n",
        profile.headline.to_lowercase(),
        profile.education,
    );
    for fact in profile.facts {
        prompt.push_str("- ");
        prompt.push_str(fact);
        prompt.push('\n');
    }
    prompt.push_str(&format!(
        "\nAnswer questions about {name}'s background, projects, skills, and experience. \
         Be conversational, helpful, and showcase the technical expertise. \
         Keep responses concise but informative.\n"
    ));
    let context = context.trim();
    if !context.is_empty() {
        prompt.push_str(&format!("\nAdditional context: {context}\n"));
    }
    prompt
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
