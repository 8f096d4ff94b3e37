use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tansaku_provider_helper::{size, timestamp, title};
use tansaku_provider_prelude::TorrentRecord;

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.post-index > tbody > tr").unwrap());
static ROW_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.title > span.title > a").unwrap());
static ROW_TEAM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.title > span.label-team > a").unwrap());
static ROW_SIZE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td.size").unwrap());
static ROW_DATE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td.date time").unwrap());
static ROW_DOWNLOAD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.action > a").unwrap());

fn find<'a>(elt: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    elt.select(selector).next()
}

fn text_of(elt: &ElementRef, selector: &Selector) -> String {
    find(elt, selector)
        .map(|found| found.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn attr_of(elt: &ElementRef, selector: &Selector, name: &str) -> String {
    find(elt, selector)
        .and_then(|found| found.value().attr(name))
        .map(String::from)
        .unwrap_or_default()
}

/// Untouched values read out of one result row, empty when missing.
#[derive(Debug)]
pub(crate) struct RawRow {
    title: String,
    path: String,
    team: String,
    size: String,
    timestamp: String,
    download_path: String,
}

impl RawRow {
    fn from_element(elt: &ElementRef) -> Self {
        Self {
            title: text_of(elt, &ROW_TITLE_SELECTOR),
            path: attr_of(elt, &ROW_TITLE_SELECTOR, "href"),
            team: text_of(elt, &ROW_TEAM_SELECTOR),
            size: text_of(elt, &ROW_SIZE_SELECTOR),
            timestamp: attr_of(elt, &ROW_DATE_SELECTOR, "datetime"),
            download_path: attr_of(elt, &ROW_DOWNLOAD_SELECTOR, "href"),
        }
    }

    pub(crate) fn into_record(self, base_url: &str) -> TorrentRecord {
        let (name, release_group) = title::resolve_release_group(&self.title, &self.team);
        let resolution = title::parse_resolution(&name)
            .map(String::from)
            .unwrap_or_default();

        TorrentRecord {
            date: timestamp::to_iso_string(&self.timestamp),
            size: size::parse_bytes(&self.size),
            formatted_size: self.size,
            link: format!("{base_url}{}", self.path),
            download_url: format!("{base_url}{}", self.download_path),
            name,
            release_group,
            resolution,
            ..Default::default()
        }
    }
}

pub(crate) fn parse_rows(html: &str) -> Vec<RawRow> {
    let html = Html::parse_document(html);
    html.select(&ROW_SELECTOR)
        .map(|row| RawRow::from_element(&row))
        .collect()
}

pub fn parse(base_url: &str, html: &str) -> Vec<TorrentRecord> {
    parse_rows(html)
        .into_iter()
        .map(|row| row.into_record(base_url))
        .collect()
}
