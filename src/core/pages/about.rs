use serde::Serialize;

use super::{PageContent, PageShape, ResolverFactory};
use crate::core::catalog::join_key_path;

pub const ABOUT_PAGE_ID: &str = "about";

/// Team roster, in display order. Each slug addresses
/// `about.team.members.<slug>` in the catalog.
pub const TEAM_MEMBER_SLUGS: [&str; 3] = ["founder", "engineering", "design"];

const NAMESPACE: &str = "about";
const MEMBER_FIELDS: [&str; 5] = [
    "name",
    "role",
    "socials.github",
    "socials.linkedin",
    "socials.discord",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub title: String,
    pub description: String,
    pub team: TeamBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBlock {
    pub title: String,
    pub members: [TeamMember; TEAM_MEMBER_SLUGS.len()],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub slug: String,
    pub name: String,
    pub role: String,
    pub socials: MemberSocials,
}

/// Profile links. An empty string means the member has no such profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSocials {
    pub github: String,
    pub linkedin: String,
    pub discord: String,
}

impl PageShape for AboutPage {
    const PAGE_ID: &'static str = ABOUT_PAGE_ID;

    fn schema() -> Vec<String> {
        let mut keys = vec![
            join_key_path(NAMESPACE, "title"),
            join_key_path(NAMESPACE, "description"),
            join_key_path(NAMESPACE, "team.title"),
        ];
        for slug in TEAM_MEMBER_SLUGS {
            for field in MEMBER_FIELDS {
                keys.push(format!("{}.team.members.{}.{}", NAMESPACE, slug, field));
            }
        }
        keys
    }

    fn build(factory: &ResolverFactory) -> Self {
        let t = factory.resolver(NAMESPACE);
        let team = t.scope("team");
        let members = team.scope("members");

        AboutPage {
            title: t.text("title"),
            description: t.text("description"),
            team: TeamBlock {
                title: team.text("title"),
                members: TEAM_MEMBER_SLUGS.map(|slug| {
                    let member = members.scope(slug);
                    let socials = member.scope("socials");
                    TeamMember {
                        slug: slug.to_string(),
                        name: member.text("name"),
                        role: member.text("role"),
                        socials: MemberSocials {
                            github: socials.text("github"),
                            linkedin: socials.text("linkedin"),
                            discord: socials.text("discord"),
                        },
                    }
                }),
            },
        }
    }

    fn into_content(self) -> PageContent {
        PageContent::About(self)
    }
}
