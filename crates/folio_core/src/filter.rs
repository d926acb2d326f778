//! Project category filter

use crate::content::{Project, ProjectCategory, PROJECTS};

/// Active filter button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl Filter {
    /// Every filter button in display order, `All` first
    pub fn buttons() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(ProjectCategory::ALL.into_iter().map(Filter::Category))
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Category(category) => category.label(),
        }
    }

    /// Whether a project passes this filter
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => project.category == category,
        }
    }
}

/// Projects passing the filter, in their original order
pub fn filter_projects(filter: Filter) -> Vec<&'static Project> {
    filter_in(PROJECTS, filter)
}

/// Filter an arbitrary project list
pub fn filter_in(projects: &[Project], filter: Filter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Badge count for every filter button
///
/// `All` counts every project; a category may count zero.
pub fn category_counts() -> Vec<(Filter, usize)> {
    Filter::buttons()
        .map(|filter| (filter, PROJECTS.iter().filter(|p| filter.matches(p)).count()))
        .collect()
}

/// Project for the detail view
pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_everything() {
        assert_eq!(filter_projects(Filter::All).len(), PROJECTS.len());
    }

    #[test]
    fn test_single_category() {
        let academic = filter_projects(Filter::Category(ProjectCategory::Academic));
        assert_eq!(academic.len(), 1);
        assert_eq!(academic[0].title, "E-Commerce Platform");
    }

    #[test]
    fn test_empty_category() {
        assert!(filter_projects(Filter::Category(ProjectCategory::FullStack)).is_empty());
    }

    #[test]
    fn test_counts_match_filters() {
        let counts = category_counts();
        assert_eq!(counts.len(), 6);
        assert_eq!(counts[0], (Filter::All, 3));
        for (filter, count) in counts {
            assert_eq!(filter_projects(filter).len(), count, "{}", filter.label());
        }
    }

    #[test]
    fn test_project_by_id() {
        assert_eq!(project_by_id(2).unwrap().title, "Task Manager");
        assert!(project_by_id(99).is_none());
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }
}
