use crate::components::icons::IconKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
    pub github: Option<&'static str>,
    pub coming_soon: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

impl TeamMember {
    /// Avatar fallback: the first character of the handle, uppercased.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

pub const TAGLINE: &str = "From one Zuki to a Journey.";
pub const HEADLINE: &str = "Welcome to the Future of AI Integration";
pub const HERO_DESCRIPTION: &str = "zukijourney: Your gateway to a world where AI meets creativity, community, and innovation. \
    Embark on a journey where artificial intelligence seamlessly integrates with human interaction.";

pub const CTA_HEADLINE: &str = "Experience the AI Revolution";
pub const CTA_DESCRIPTION: &str = "Join our Discord server and immerse yourself in a unique environment where \
    AI users seamlessly integrate with real users, creating an unparalleled \
    experience in the world of Discord communities.";

pub const COPYRIGHT: &str = "© 2024 zukijourney. All rights reserved.";

pub const PROJECTS: [Project; 4] = [
    Project {
        icon: IconKind::Code,
        title: "zukijourney-api",
        description: "One of the largest and oldest continuously operating freemium multi AI API on Discord.",
        link: Some("https://docs.zukijourney.com/ai"),
        github: Some("https://github.com/zukijourney/api-oss"),
        coming_soon: false,
    },
    Project {
        icon: IconKind::Users,
        title: "zukijourney-bots",
        description: "AI-powered bots serving 50,000+ users across 3000+ servers, including zuki.gm and zuki.time.",
        link: Some("https://docs.zukijourney.com/bots"),
        github: Some("https://github.com/zukijourney/bots-docs"),
        coming_soon: false,
    },
    Project {
        icon: IconKind::Sparkles,
        title: "CAS (Cool AI Stuff)",
        description: "Uncensored benchmarks and showcase of free-to-use AI APIs on Discord.",
        link: Some("https://cas.zukijourney.com"),
        github: Some("https://github.com/zukixa/cool-ai-stuff"),
        coming_soon: false,
    },
    Project {
        icon: IconKind::Zap,
        title: "Project ORNE",
        description: "A secretive project set to revolutionize AI integration. Coming 9/25/2024.",
        link: None,
        github: None,
        coming_soon: true,
    },
];

pub const TEAM: [TeamMember; 8] = [
    TeamMember {
        name: "zukixa",
        role: "CEO",
        avatar_url: Some("https://cdn.discordapp.com/avatars/325699845031723010/3eb13f80d44c05a0f94e9fd0151e2fbd.webp?size=4096"),
        github_url: Some("https://github.com/zukixa"),
    },
    TeamMember {
        name: "thatluvinhasguy",
        role: "CTO",
        avatar_url: Some("https://cdn.discordapp.com/avatars/881961145236353056/d4216d644564b3ce3e307a8a018a41ce.webp?size=4096"),
        github_url: Some("https://github.com/ThatLukinhasGuy"),
    },
    TeamMember {
        name: "aunchers",
        role: "CSO",
        avatar_url: Some("https://cdn.discordapp.com/avatars/800718471935557663/757dd08a5230de37efa9dac13665cd2a.webp?size=4096"),
        github_url: Some("https://github.com/Aunchers"),
    },
    TeamMember {
        name: "thorn_ike",
        role: "Chief RP Officer",
        avatar_url: Some("https://cdn.discordapp.com/avatars/345275472764076032/a_bf1f4d4e0e7b999c2196fc2ca75c155d.gif?size=4096"),
        github_url: Some("https://github.com/thorn_ike"),
    },
    TeamMember {
        name: "prostoleander",
        role: "Executive",
        avatar_url: Some("https://cdn.discordapp.com/avatars/829858497746305024/316127131824b4400e9f333232ba4440.webp?size=4096"),
        github_url: Some("https://github.com/henceiusegentoo"),
    },
    TeamMember {
        name: "sabsterrexx",
        role: "Executive",
        avatar_url: Some("https://cdn.discordapp.com/avatars/864267600070836284/05a70ff902393fe693fd1a56a2257835.webp?size=4096"),
        github_url: Some("https://github.com/sabsterrexx"),
    },
    TeamMember {
        name: "voidiiii",
        role: "Executive",
        avatar_url: Some("https://cdn.discordapp.com/avatars/821328725643100172/5acd5ef1d04c44ff2ed3777abc80597a.webp?size=4096"),
        github_url: Some("https://github.com/void6670"),
    },
    TeamMember {
        name: "lunaiiii",
        role: "Executive",
        avatar_url: Some("https://cdn.discordapp.com/avatars/868795530493431868/1a9992096ad3b8a53d787b1ee5985af5.webp?size=4096"),
        github_url: Some("https://github.com/zukixa"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn member_initial_is_uppercased_first_char() {
        assert_eq!(TEAM[0].initial(), "Z");
        assert_eq!(TEAM[3].initial(), "T");
    }

    #[test]
    fn member_names_are_unique() {
        // names double as list keys
        let names: HashSet<_> = TEAM.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), TEAM.len());
    }

    #[test]
    fn coming_soon_projects_carry_no_links() {
        for project in PROJECTS.iter().filter(|p| p.coming_soon) {
            assert!(project.link.is_none());
            assert!(project.github.is_none());
        }
        assert_eq!(PROJECTS.iter().filter(|p| p.coming_soon).count(), 1);
    }
}
