/// `QueryMap` usage example
use urlsplit::{Field, UrlSplit};

fn main() {
    let url = UrlSplit::new("https://shop.example.com/search?q=lamp&sort=&page=2&q=desk+lamp&flag");

    // Raw entries, including the ones without a value
    // ["q=lamp", "sort=", "page=2", "q=desk+lamp", "flag"]
    println!("Query list: {:?}", url.query_list());
    println!();

    // Only complete entries, the last value of a key wins
    for (key, value) in url.query_object() {
        println!("  {key} = {value}"); // q = desk+lamp, page = 2
    }
    println!();

    println!("q: {:?}", url.query_value("q")); // Some("desk+lamp")
    println!("sort: {:?}", url.query_value("sort")); // None
    println!();

    // Fields can also be looked up by name
    if let Ok(field) = "queryObject".parse::<Field>() {
        println!("{field}: {:?}", url.field(field));
    }
}
