use smallvec::SmallVec;

/// Marks per nav link; portfolio navs rarely exceed a handful of entries.
pub type ActiveMarks = SmallVec<[bool; 8]>;

/// Section id named by a fragment href (`"#about"` -> `"about"`).
#[inline]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Section to highlight at load: the URL fragment, or `fallback` without one.
#[inline]
pub fn initial_section<'a>(hash: &'a str, fallback: &'a str) -> &'a str {
    fragment_id(hash).unwrap_or(fallback)
}

#[derive(Clone, Debug, Default)]
pub struct NavIndex {
    hrefs: SmallVec<[String; 8]>,
    active: Option<String>,
}

impl NavIndex {
    pub fn new<I>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            hrefs: hrefs.into_iter().collect(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Index of the first link pointing at `section_id`.
    pub fn position(&self, section_id: &str) -> Option<usize> {
        self.hrefs
            .iter()
            .position(|href| fragment_id(href) == Some(section_id))
    }

    /// Record `section_id` as active and return one mark per link.
    ///
    /// At most one link is marked, even when several share an href.
    pub fn activate(&mut self, section_id: &str) -> ActiveMarks {
        let hit = self.position(section_id);
        self.active = Some(section_id.to_string());
        (0..self.hrefs.len()).map(|i| Some(i) == hit).collect()
    }
}

/// One observer entry reduced to what the tie-break needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSighting {
    pub id: String,
    /// Top edge relative to the viewport, in CSS px.
    pub top: f64,
    pub intersecting: bool,
}

/// Topmost intersecting section of a batch; equal tops keep delivery order.
pub fn topmost_visible(sightings: &[SectionSighting]) -> Option<&str> {
    let mut best: Option<&SectionSighting> = None;
    for s in sightings.iter().filter(|s| s.intersecting && !s.id.is_empty()) {
        match best {
            Some(b) if s.top.total_cmp(&b.top).is_ge() => {}
            _ => best = Some(s),
        }
    }
    best.map(|s| s.id.as_str())
}
