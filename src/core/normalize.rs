use crate::domain::model::{ConferenceSeries, RawConference, RawDeadlines, Scalar, YearInstance};

pub const UNKNOWN: &str = "N/A";
pub const TBD: &str = "TBD";
pub const NO_LINK: &str = "#";
const FILE_TITLE_FALLBACK: &str = "conf";

fn text_or(value: &Option<Scalar>, default: &str) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Resolves every optional field of a feed entry to its default. Never fails.
pub fn normalize(raw: &RawConference) -> ConferenceSeries {
    let instances = raw
        .confs
        .as_deref()
        .unwrap_or_default()
        .iter()
        .flatten()
        .map(|conf| {
            // Only the first deadline round is rendered.
            let empty = RawDeadlines::default();
            let deadlines = conf
                .timeline
                .as_deref()
                .and_then(|timeline| timeline.first())
                .and_then(Option::as_ref)
                .unwrap_or(&empty);

            YearInstance {
                year: text_or(&conf.year, TBD),
                date: text_or(&conf.date, TBD),
                place: text_or(&conf.place, TBD),
                link: text_or(&conf.link, NO_LINK),
                abstract_deadline: text_or(&deadlines.abstract_deadline, TBD),
                submit_deadline: text_or(&deadlines.deadline, TBD),
            }
        })
        .collect();

    ConferenceSeries {
        title: text_or(&raw.title, UNKNOWN),
        file_title: text_or(&raw.title, FILE_TITLE_FALLBACK),
        dblp: text_or(&raw.dblp, NO_LINK),
        ccf_rank: text_or(&raw.rank.as_ref().and_then(|r| r.ccf.clone()), UNKNOWN),
        description: text_or(&raw.description, ""),
        instances,
    }
}
