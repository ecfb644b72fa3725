use rolodex_db::people::models::{Image, PersonName};

use crate::people::responses::{ExternalLinksViewModel, ImageViewModel, NameViewModel};

const LINK_BASE_URL: &str = "www.xxxxx.com/link.asp?i=";
const PICTURE_LINK_TYPE: &str = "ls";
const GUESTBOOK_LINK_TYPE: &str = "gb";
const IMAGE_BASE_URL: &str = "http://www.xxxxx.com";

pub fn format_name(name: &PersonName) -> NameViewModel {
    NameViewModel {
        full: full_name(name),
        short: short_name(name),
        list: list_name(name),
    }
}

/// `prefix first middle "aka" (maiden) last suffix`, absent tokens omitted.
fn full_name(name: &PersonName) -> String {
    join_tokens([
        name.prefix.clone(),
        name.first.clone(),
        name.middle.clone(),
        name.aka.as_deref().map(quoted),
        name.maiden.as_deref().map(parenthesized),
        name.last.clone(),
        name.suffix.clone(),
    ])
}

/// `first middle last`, no honorifics.
fn short_name(name: &PersonName) -> String {
    join_tokens([name.first.clone(), name.middle.clone(), name.last.clone()])
}

/// `last suffix, prefix first middle "aka" maiden`. The comma is emitted
/// only when both sides are non-empty.
fn list_name(name: &PersonName) -> String {
    let head = join_tokens([name.last.clone(), name.suffix.clone()]);
    let tail = join_tokens([
        name.prefix.clone(),
        name.first.clone(),
        name.middle.clone(),
        name.aka.as_deref().map(quoted),
        name.maiden.clone(),
    ]);

    match (head.is_empty(), tail.is_empty()) {
        (false, false) => format!("{head}, {tail}"),
        (false, true) => head,
        (true, _) => tail,
    }
}

pub fn format_external_links(external_link_id: Option<&str>) -> Option<ExternalLinksViewModel> {
    external_link_id.map(|id| ExternalLinksViewModel {
        picture: format!("{LINK_BASE_URL}{PICTURE_LINK_TYPE}{id}"),
        guestbook: format!("{LINK_BASE_URL}{GUESTBOOK_LINK_TYPE}{id}"),
    })
}

/// Rewrite relative portrait hrefs to absolute URLs. Images without an href
/// are dropped; hrefs that already carry a scheme pass through untouched.
pub fn format_portrait_images(images: &[Image]) -> Vec<ImageViewModel> {
    images
        .iter()
        .filter_map(|image| {
            let href = image.href.as_deref()?;
            Some(ImageViewModel {
                name: image.name.clone(),
                href: absolute_href(href),
            })
        })
        .collect()
}

fn absolute_href(href: &str) -> String {
    if href.contains("://") {
        href.to_owned()
    } else {
        format!("{IMAGE_BASE_URL}{href}")
    }
}

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

fn parenthesized(value: &str) -> String {
    format!("({value})")
}

fn join_tokens(tokens: impl IntoIterator<Item = Option<String>>) -> String {
    tokens
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fixture_name() -> PersonName {
        PersonName {
            first: Some("Ross".to_owned()),
            middle: Some("John".to_owned()),
            last: Some("Perot".to_owned()),
            prefix: Some("Mr.".to_owned()),
            suffix: Some("MD".to_owned()),
            aka: Some("RP".to_owned()),
            maiden: Some("Smith".to_owned()),
        }
    }

    #[test]
    fn full_name_renders_every_token() {
        let name = format_name(&full_fixture_name());
        assert_eq!(name.full, "Mr. Ross John \"RP\" (Smith) Perot MD");
    }

    #[test]
    fn short_name_is_first_middle_last() {
        let name = format_name(&PersonName {
            first: Some("Ross".to_owned()),
            middle: Some("John".to_owned()),
            last: Some("Smith".to_owned()),
            ..Default::default()
        });
        assert_eq!(name.short, "Ross John Smith");
    }

    #[test]
    fn short_name_ignores_honorifics() {
        let name = format_name(&full_fixture_name());
        assert_eq!(name.short, "Ross John Perot");
    }

    #[test]
    fn list_name_puts_last_and_suffix_before_comma() {
        let name = format_name(&full_fixture_name());
        assert_eq!(name.list, "Perot MD, Mr. Ross John \"RP\" Smith");
    }

    #[test]
    fn absent_tokens_are_omitted_cleanly() {
        let name = format_name(&PersonName {
            first: Some("Ross".to_owned()),
            last: Some("Perot".to_owned()),
            ..Default::default()
        });
        assert_eq!(name.full, "Ross Perot");
        assert_eq!(name.short, "Ross Perot");
        assert_eq!(name.list, "Perot, Ross");
    }

    #[test]
    fn list_name_without_last_or_suffix_drops_the_comma() {
        let name = format_name(&PersonName {
            first: Some("Ross".to_owned()),
            ..Default::default()
        });
        assert_eq!(name.list, "Ross");
    }

    #[test]
    fn empty_name_formats_to_empty_strings() {
        let name = format_name(&PersonName::default());
        assert_eq!(name.full, "");
        assert_eq!(name.short, "");
        assert_eq!(name.list, "");
    }

    #[test]
    fn external_links_use_ls_and_gb_type_codes() {
        let links = format_external_links(Some("000000021109")).expect("links should exist");
        assert_eq!(links.picture, "www.xxxxx.com/link.asp?i=ls000000021109");
        assert_eq!(links.guestbook, "www.xxxxx.com/link.asp?i=gb000000021109");
    }

    #[test]
    fn external_links_absent_without_id() {
        assert!(format_external_links(None).is_none());
    }

    #[test]
    fn portrait_hrefs_are_made_absolute() {
        let images = vec![Image {
            name: Some("header".to_owned()),
            href: Some("/header.jpg".to_owned()),
        }];
        let out = format_portrait_images(&images);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].href, "http://www.xxxxx.com/header.jpg");
    }

    #[test]
    fn absolute_portrait_hrefs_pass_through() {
        let images = vec![Image {
            name: None,
            href: Some("http://elsewhere.example/logo.jpg".to_owned()),
        }];
        let out = format_portrait_images(&images);
        assert_eq!(out[0].href, "http://elsewhere.example/logo.jpg");
    }

    #[test]
    fn images_without_href_are_dropped() {
        let images = vec![Image {
            name: Some("broken".to_owned()),
            href: None,
        }];
        assert!(format_portrait_images(&images).is_empty());
    }
}
