use portfolio_site::{blog::get_entries, rss::build_channel};
use std::fs::File;

const FEED_PATH: &str = "public/rss.xml";

fn main() {
    let entries = get_entries();
    let channel = build_channel(entries);

    let file = File::create(FEED_PATH).expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
    println!("wrote {} items to {FEED_PATH}", channel.items().len());
}
