use scraper::{Html, Selector};

lazy_static! {
    static ref MEDIA_SELECTOR: Selector = Selector::parse("div.media-lightbox-img").unwrap();
    static ref IMG_SELECTOR: Selector = Selector::parse("img").unwrap();
}

// the only place that knows how the source page is structured: one candidate
// per media container, taken from the first img inside it
pub fn list_candidate_urls(document: &Html) -> Vec<String> {
    let mut urls = Vec::new();

    for media in document.select(&MEDIA_SELECTOR) {
        let Some(img) = media.select(&IMG_SELECTOR).next()
        else {
            continue;
        };

        if let Some(src) = img.value().attr("src") {
            urls.push(src.to_string());
        }
    }

    urls
}
