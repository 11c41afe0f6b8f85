use crate::domain::a006_location::{LocationLevel, LocationOption};
use crate::shared::api_error::ApiError;
use crate::shared::list_query::OptionsRequest;

/// Option list of one selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionsState {
    /// Parent not chosen yet
    #[default]
    Idle,
    Loading,
    Loaded(Vec<LocationOption>),
    /// Fetch failed; the list stays empty until the parent changes again
    Failed,
}

impl OptionsState {
    pub fn options(&self) -> &[LocationOption] {
        match self {
            OptionsState::Loaded(options) => options,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, OptionsState::Loading)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LevelSlot {
    selected: Option<LocationOption>,
    options: OptionsState,
    pending: Option<u64>,
}

impl LevelSlot {
    fn clear(&mut self) {
        *self = LevelSlot::default();
    }
}

/// Fetch the chain asks its driver to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsFetch {
    pub level: LocationLevel,
    pub request: OptionsRequest,
    ticket: u64,
}

/// State machine behind the location selectors.
///
/// Transitions happen only through `select`, `begin_fetch`, `resolve` and
/// `reset`. Selecting at a level always empties every deeper level, and a
/// fetch result is applied only if no newer fetch was started for its level
/// in the meantime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorChain {
    slots: [LevelSlot; 4],
    next_ticket: u64,
}

impl SelectorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, level: LocationLevel) -> Option<&LocationOption> {
        self.slots[level.index()].selected.as_ref()
    }

    pub fn options(&self, level: LocationLevel) -> &OptionsState {
        &self.slots[level.index()].options
    }

    /// A selector is usable once its parent has a selection
    pub fn is_enabled(&self, level: LocationLevel) -> bool {
        level
            .parent()
            .map_or(true, |parent| self.selected(parent).is_some())
    }

    /// Every level has a selection down to and including `level`
    pub fn is_complete_to(&self, level: LocationLevel) -> bool {
        LocationLevel::ALL
            .iter()
            .take(level.index() + 1)
            .all(|l| self.selected(*l).is_some())
    }

    /// Set the selection at `level`, clear all deeper levels and return the
    /// fetch for the child level's options, if there is a child level.
    pub fn select(&mut self, level: LocationLevel, option: LocationOption) -> Option<OptionsFetch> {
        self.slots[level.index()].selected = Some(option);
        for below in level.descendants() {
            self.slots[below.index()].clear();
        }
        level.child().map(|child| self.begin_fetch(child))
    }

    /// Clear the selection at `level` and everything below it
    pub fn clear(&mut self, level: LocationLevel) {
        self.slots[level.index()].selected = None;
        for below in level.descendants() {
            self.slots[below.index()].clear();
        }
    }

    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.clear();
        }
    }

    /// Mark `level` as loading and build its scoped request
    pub fn begin_fetch(&mut self, level: LocationLevel) -> OptionsFetch {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let slot = &mut self.slots[level.index()];
        slot.options = OptionsState::Loading;
        slot.pending = Some(ticket);
        OptionsFetch {
            level,
            request: self.request_for(level),
            ticket,
        }
    }

    /// Apply a fetch result. Returns `false` when the fetch is stale and the
    /// result was dropped.
    pub fn resolve(
        &mut self,
        fetch: &OptionsFetch,
        result: Result<Vec<LocationOption>, ApiError>,
    ) -> bool {
        let slot = &mut self.slots[fetch.level.index()];
        if slot.pending != Some(fetch.ticket) {
            return false;
        }
        slot.pending = None;
        slot.options = match result {
            Ok(options) => OptionsState::Loaded(options),
            Err(_) => OptionsState::Failed,
        };
        true
    }

    fn selected_id(&self, level: LocationLevel) -> Option<&str> {
        self.selected(level).map(|o| o.id.as_str())
    }

    fn request_for(&self, level: LocationLevel) -> OptionsRequest {
        match level {
            LocationLevel::Country => OptionsRequest::root(),
            LocationLevel::State => {
                OptionsRequest::scoped(self.selected_id(LocationLevel::Country), None, None)
            }
            LocationLevel::City => OptionsRequest::scoped(
                self.selected_id(LocationLevel::Country),
                self.selected_id(LocationLevel::State),
                None,
            ),
            LocationLevel::Area => OptionsRequest::scoped(
                self.selected_id(LocationLevel::Country),
                self.selected_id(LocationLevel::State),
                self.selected_id(LocationLevel::City),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(id: &str) -> LocationOption {
        LocationOption::new(id, id.to_uppercase())
    }

    fn loaded_chain() -> SelectorChain {
        let mut chain = SelectorChain::new();
        let fetch = chain.select(LocationLevel::Country, opt("in")).unwrap();
        chain.resolve(&fetch, Ok(vec![opt("ka"), opt("mh")]));
        let fetch = chain.select(LocationLevel::State, opt("ka")).unwrap();
        chain.resolve(&fetch, Ok(vec![opt("blr")]));
        let fetch = chain.select(LocationLevel::City, opt("blr")).unwrap();
        chain.resolve(&fetch, Ok(vec![opt("indiranagar")]));
        chain.select(LocationLevel::Area, opt("indiranagar"));
        chain
    }

    #[test]
    fn test_parent_change_empties_descendants() {
        let mut chain = loaded_chain();
        assert!(chain.is_complete_to(LocationLevel::Area));

        let fetch = chain.select(LocationLevel::Country, opt("us")).unwrap();
        assert_eq!(fetch.level, LocationLevel::State);
        assert_eq!(chain.options(LocationLevel::State), &OptionsState::Loading);
        for level in [LocationLevel::State, LocationLevel::City, LocationLevel::Area] {
            assert_eq!(chain.selected(level), None);
            assert!(chain.options(level).options().is_empty());
        }
        assert_eq!(chain.options(LocationLevel::City), &OptionsState::Idle);
    }

    #[test]
    fn test_requests_are_scoped_to_ancestors() {
        let mut chain = loaded_chain();
        let fetch = chain.select(LocationLevel::State, opt("mh")).unwrap();
        assert_eq!(fetch.level, LocationLevel::City);
        assert_eq!(fetch.request.country_ids, Some(vec!["in".to_string()]));
        assert_eq!(fetch.request.state_ids, Some(vec!["mh".to_string()]));
        assert_eq!(fetch.request.city_ids, None);
    }

    #[test]
    fn test_leaf_selection_fetches_nothing() {
        let mut chain = loaded_chain();
        assert_eq!(chain.select(LocationLevel::Area, opt("koramangala")), None);
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let mut chain = SelectorChain::new();
        let first = chain.select(LocationLevel::Country, opt("in")).unwrap();
        let second = chain.select(LocationLevel::Country, opt("us")).unwrap();

        assert!(chain.resolve(&second, Ok(vec![opt("ca")])));
        assert!(!chain.resolve(&first, Ok(vec![opt("ka")])));
        assert_eq!(chain.options(LocationLevel::State).options(), &[opt("ca")]);
    }

    #[test]
    fn test_failed_fetch_leaves_children_empty() {
        let mut chain = SelectorChain::new();
        let fetch = chain.select(LocationLevel::Country, opt("in")).unwrap();
        assert!(chain.resolve(&fetch, Err(ApiError::Status(502))));
        assert_eq!(chain.options(LocationLevel::State), &OptionsState::Failed);
        assert!(chain.options(LocationLevel::State).options().is_empty());
        assert!(chain.is_enabled(LocationLevel::State));
        assert!(!chain.is_enabled(LocationLevel::City));
    }

    #[test]
    fn test_clear_and_reset() {
        let mut chain = loaded_chain();
        chain.clear(LocationLevel::City);
        assert!(chain.selected(LocationLevel::State).is_some());
        assert_eq!(chain.selected(LocationLevel::City), None);
        assert_eq!(chain.options(LocationLevel::Area), &OptionsState::Idle);

        chain.reset();
        for level in LocationLevel::ALL {
            assert_eq!(chain.selected(level), None);
            assert_eq!(chain.options(level), &OptionsState::Idle);
        }
    }
}
