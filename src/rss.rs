use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::blog::BlogEntry;
use crate::content::OWNER;

pub const SITE_URL: &str = "https://www.smarttechdevs.com";

/// Entries link out to where the articles are published, so each item's
/// guid is the external article URL.
pub fn build_channel(entries: Vec<BlogEntry>) -> Channel {
    let items = entries
        .into_iter()
        .map(|e| {
            let guid = GuidBuilder::default().value(&e.url).permalink(true).build();
            ItemBuilder::default()
                .title(e.title)
                .description(e.excerpt)
                .author(OWNER.to_string())
                .pub_date(e.date.to_rfc2822())
                .link(e.url)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE_URL}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{OWNER}'s Blog"))
        .description("Stay updated with the latest trends and insights in web development and design.")
        .link(format!("{SITE_URL}/#blog"))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::get_entries;

    #[test]
    fn test_channel_lists_every_entry() {
        let entries = get_entries();
        let channel = build_channel(entries.clone());
        assert_eq!(channel.items().len(), entries.len());

        let first = &channel.items()[0];
        assert_eq!(first.title(), Some(entries[0].title.as_str()));
        assert_eq!(first.link(), Some(entries[0].url.as_str()));
        assert_eq!(first.guid().map(|g| g.value()), Some(entries[0].url.as_str()));
        assert_eq!(first.author(), Some(OWNER));
    }
}
