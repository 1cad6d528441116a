use serde::Serialize;

use super::{PageContent, PageShape, ResolverFactory};
use crate::core::catalog::join_key_path;

pub const HOME_PAGE_ID: &str = "home";

/// Number of entries in `features.items`.
pub const HOME_FEATURE_COUNT: usize = 3;

const NAMESPACE: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub hero: HeroBlock,
    pub features: FeaturesBlock,
    pub social: SocialBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    pub headline: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesBlock {
    pub title: String,
    pub items: [FeatureItem; HOME_FEATURE_COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialBlock {
    pub title: String,
    pub description: String,
}

impl PageShape for HomePage {
    const PAGE_ID: &'static str = HOME_PAGE_ID;

    fn schema() -> Vec<String> {
        let mut keys: Vec<String> = [
            "hero.headline",
            "hero.subtitle",
            "hero.ctaText",
            "hero.ctaHref",
            "features.title",
        ]
        .iter()
        .map(|key| join_key_path(NAMESPACE, key))
        .collect();

        for index in 0..HOME_FEATURE_COUNT {
            for field in ["title", "description"] {
                keys.push(format!("{}.features.items.{}.{}", NAMESPACE, index, field));
            }
        }

        keys.push(join_key_path(NAMESPACE, "social.title"));
        keys.push(join_key_path(NAMESPACE, "social.description"));
        keys
    }

    fn build(factory: &ResolverFactory) -> Self {
        let t = factory.resolver(NAMESPACE);

        let hero = t.scope("hero");
        let features = t.scope("features");
        let social = t.scope("social");

        HomePage {
            hero: HeroBlock {
                headline: hero.text("headline"),
                subtitle: hero.text("subtitle"),
                cta_text: hero.text("ctaText"),
                cta_href: hero.text("ctaHref"),
            },
            features: FeaturesBlock {
                title: features.text("title"),
                items: std::array::from_fn(|index| {
                    let item = features.item("items", index);
                    FeatureItem {
                        title: item.text("title"),
                        description: item.text("description"),
                    }
                }),
            },
            social: SocialBlock {
                title: social.text("title"),
                description: social.text("description"),
            },
        }
    }

    fn into_content(self) -> PageContent {
        PageContent::Home(self)
    }
}
