use url::Url;

/// Camera position a bookmark link encodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            latitude: 0.,
            longitude: 0.,
            altitude: 10_000_000.,
        }
    }
}

/// Builds a shareable link to `view` by appending it to `base` as query
/// parameters. Anything already in the base query is kept. Six decimal
/// places of a degree are about 10 cm on the ground, which round-trips a
/// camera position; altitude is kept to whole metres.
pub fn bookmark_url(base: &Url, view: &View) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("lat", &format!("{:.6}", view.latitude))
        .append_pair("lon", &format!("{:.6}", view.longitude))
        .append_pair("alt", &format!("{:.0}", view.altitude));
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(latitude: f64, longitude: f64, altitude: f64) -> View {
        View {
            latitude,
            longitude,
            altitude,
        }
    }

    #[test]
    fn view_pairs_appended() {
        let base = Url::parse("https://example.org/explorer").unwrap();
        let url = bookmark_url(&base, &v(34.2, -118.5, 250000.));
        assert_eq!(
            url.as_str(),
            "https://example.org/explorer?lat=34.200000&lon=-118.500000&alt=250000"
        );
    }

    #[test]
    fn base_query_preserved() {
        let base = Url::parse("https://example.org/explorer?layer=topo").unwrap();
        let url = bookmark_url(&base, &v(0., 0., 10_000_000.));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("layer".into(), "topo".into()),
                ("lat".into(), "0.000000".into()),
                ("lon".into(), "0.000000".into()),
                ("alt".into(), "10000000".into()),
            ]
        );
    }

    #[test]
    fn result_reparses() {
        let base = Url::parse("https://example.org/").unwrap();
        let url = bookmark_url(&base, &v(-89.999999, 179.999999, 1.));
        let reparsed = Url::parse(url.as_str()).unwrap();
        assert_eq!(reparsed, url);
    }
}
