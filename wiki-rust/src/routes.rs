use crate::Wiki;

/// Route the backend plugin answers to confirm it is installed.
pub const PROBE_ROUTE: &str = "/api/plugins/hoyoverse/probe";

/// Backend route serving entries of the given wiki.
#[must_use]
pub fn route_for(wiki: Wiki) -> &'static str {
    match wiki {
        Wiki::StarRail => "/api/plugins/hoyoverse/silver-wolf",
        Wiki::Genshin => "/api/plugins/hoyoverse/furina",
    }
}
