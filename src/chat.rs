//! Rule-based intent responder for the portfolio chatbot.
//!
//! Each incoming message is classified into one of a fixed set of intents
//! by keyword presence, then answered with a templated response populated
//! from the live content repository. Classification is stateless: only the
//! current message text is consulted, never the conversation history.
//!
//! The intent list is tested in a fixed priority order and the first intent
//! with a keyword hit wins, so a message touching several topics gets the
//! highest-priority answer.

use tracing::debug;

use crate::content::About;
use crate::repository::ContentRepository;

/// Skills at or above this level are named in the skills answer.
pub const SKILL_HIGHLIGHT_LEVEL: u8 = 80;

/// How many achievements the certifications answer previews.
pub const ACHIEVEMENT_PREVIEW_COUNT: usize = 3;

/// The question categories the chatbot recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Skills,
    Projects,
    Ai,
    Certifications,
    Experience,
    Contact,
    Education,
    FullStack,
    Database,
    Default,
}

/// Keyword sets per intent, in priority order.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Skills, &["skill", "technology", "tech stack"]),
    (Intent::Projects, &["project", "portfolio", "work"]),
    (Intent::Ai, &["ai", "artificial intelligence", "machine learning"]),
    (Intent::Certifications, &["certification", "achievement", "award"]),
    (Intent::Experience, &["experience", "internship", "hackerrank"]),
    (Intent::Contact, &["contact", "hire", "collaborate", "email"]),
    (Intent::Education, &["education", "background", "about"]),
    (Intent::FullStack, &["full stack", "frontend", "backend"]),
    (Intent::Database, &["database", "mongodb", "mysql"]),
];

/// Classify one message into an intent.
///
/// The message is lowercased and each keyword set is tested in priority
/// order; a message with no keyword hits falls through to
/// [`Intent::Default`].
pub fn classify(message: &str) -> Intent {
    let normalized = message.to_lowercase();

    for (intent, keywords) in INTENT_KEYWORDS {
        if keywords.iter().any(|kw| keyword_present(&normalized, kw)) {
            return *intent;
        }
    }

    Intent::Default
}

/// True if `keyword` occurs in `text` starting at a word boundary.
///
/// Bare substring containment is too loose for the shortest keywords:
/// "ai" occurs inside "email" and would shadow every lower-priority
/// intent. Anchoring the start of the match keeps prefix hits like
/// "skill" in "skills" while rejecting mid-word ones.
fn keyword_present(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword).any(|(at, _)| {
        text[..at]
            .chars()
            .next_back()
            .is_none_or(|prev| !prev.is_alphanumeric())
    })
}

/// Answer one free-text message from live repository content.
///
/// Always returns a non-empty string; unmatched messages get the default
/// answer pointing at the contact address.
pub fn respond(repo: &dyn ContentRepository, message: &str) -> String {
    let intent = classify(message);
    debug!(?intent, "classified chat message");

    match intent {
        Intent::Skills => skills_answer(repo),
        Intent::Projects => projects_answer(repo),
        Intent::Ai => {
            "Yes! I have experience with Gen AI projects. I've built a GenAI Chatbot Assistant \
             with natural language understanding and task automation capabilities. I've \
             integrated various APIs including OpenAI and have worked with technologies like \
             Python, TensorFlow, and FastAPI for AI applications."
                .to_string()
        }
        Intent::Certifications => certifications_answer(repo),
        Intent::Experience => {
            "I have a Software Engineer Intern certification from HackerRank and have completed \
             various technology apprenticeship programs including one with Accenture. I've also \
             participated in hackathons, winning my college's SIH Hackathon and qualifying for \
             Flipkart Grid 6.0 Level 2."
                .to_string()
        }
        Intent::Contact => {
            let about = repo.about();
            format!(
                "You can reach me at {}. I'm always open to discussing new opportunities, \
                 collaborations, or interesting projects. Feel free to connect with me on \
                 LinkedIn or check out my GitHub for more of my work!",
                about.contact_email
            )
        }
        Intent::Education => {
            let about = repo.about();
            format!(
                "I'm {}, a {} passionate about building modern web applications. {} I enjoy \
                 solving complex problems and creating user-friendly solutions with clean, \
                 efficient code.",
                about.name, about.role, about.bio
            )
        }
        Intent::FullStack => {
            "I'm a full-stack developer proficient in the MERN stack (MongoDB, Express.js, \
             React.js, Node.js). For frontend, I use React.js with modern tools like Redux, \
             Tailwind CSS, and TypeScript. For backend, I work with Node.js, Express.js, and \
             various databases. I also integrate third-party services like Stripe for payments \
             and Google Maps API."
                .to_string()
        }
        Intent::Database => database_answer(repo),
        Intent::Default => {
            let about = repo.about();
            format!(
                "That's an interesting question! I'd be happy to discuss more details about my \
                 experience, projects, or skills. Feel free to ask about specific technologies, \
                 projects, or areas you'd like to know more about. You can also contact me \
                 directly at {} for detailed discussions!",
                about.contact_email
            )
        }
    }
}

fn skills_answer(repo: &dyn ContentRepository) -> String {
    let top_skills: Vec<&str> = repo
        .skills()
        .iter()
        .filter(|skill| skill.level >= SKILL_HIGHLIGHT_LEVEL)
        .map(|skill| skill.name.as_str())
        .collect();

    format!(
        "My strongest skills are {}. I'm proficient in full-stack development with React.js, \
         Node.js, Express.js, and databases like MongoDB and MySQL. I also have experience \
         with Gen AI projects and modern web technologies like Tailwind CSS and Redux.",
        top_skills.join(", ")
    )
}

fn projects_answer(repo: &dyn ContentRepository) -> String {
    let highlights: Vec<String> = repo
        .projects()
        .iter()
        .map(|project| format!("• **{}** - {}", project.title, project.description))
        .collect();

    format!(
        "I've built several projects including:\n\n{}\n\nAll projects use modern tech stacks \
         like React.js, Node.js, MongoDB, and various APIs.",
        highlights.join("\n")
    )
}

fn certifications_answer(repo: &dyn ContentRepository) -> String {
    let cert_list: Vec<String> = repo
        .certifications()
        .iter()
        .map(|cert| format!("• {} ({})", cert.title, cert.issuer))
        .collect();
    let achievement_list: Vec<String> = repo
        .achievements()
        .iter()
        .take(ACHIEVEMENT_PREVIEW_COUNT)
        .map(|achievement| format!("• {}", achievement.title))
        .collect();

    format!(
        "**Certifications:**\n{}\n\n**Key Achievements:**\n{}\n\nI'm also a state-level table \
         tennis player and have won coding competitions!",
        cert_list.join("\n"),
        achievement_list.join("\n")
    )
}

fn database_answer(repo: &dyn ContentRepository) -> String {
    let db_skills: Vec<&str> = repo
        .skills()
        .iter()
        .filter(|skill| skill.category == "Database")
        .map(|skill| skill.name.as_str())
        .collect();

    format!(
        "I work with multiple databases including {}. I'm most experienced with MongoDB for \
         NoSQL applications and MySQL for relational data. I also have experience with \
         Firebase for real-time applications.",
        db_skills.join(", ")
    )
}

/// The assistant's opening transcript entry.
pub fn welcome_message(about: &About) -> String {
    format!(
        "Hi! I'm {}'s AI assistant. I can answer questions about the portfolio, skills, \
         projects, experience, and achievements. Try asking me something like:\n\n• \"What are \
         your strongest skills?\"\n• \"Tell me about your projects\"\n• \"What certifications \
         do you have?\"\n• \"Do you have any AI experience?\"",
        about.name
    )
}
