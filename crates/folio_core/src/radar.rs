//! Skills radar chart geometry

use std::f32::consts::{FRAC_PI_2, TAU};

use folio_math::Vec2;

use crate::content::{skill_category, Skill, SkillCategory, SKILL_CATEGORIES};

/// Grid ring levels in percent
pub const RING_LEVELS: [u8; 5] = [20, 40, 60, 80, 100];

/// Distance of labels beyond the outer ring
pub const LABEL_OFFSET: f32 = 30.0;

/// Polar layout of a radar chart
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarChart {
    pub center: Vec2,
    pub max_radius: f32,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self {
            center: Vec2::new(150.0, 150.0),
            max_radius: 120.0,
        }
    }
}

impl RadarChart {
    pub fn new(center: Vec2, max_radius: f32) -> Self {
        Self { center, max_radius }
    }

    /// Angle of spoke `index` out of `count`, starting at twelve o'clock
    pub fn angle(index: usize, count: usize) -> f32 {
        if count == 0 {
            return -FRAC_PI_2;
        }
        index as f32 * TAU / count as f32 - FRAC_PI_2
    }

    /// Point for a level (0 to 100) on spoke `index`
    pub fn point(&self, index: usize, count: usize, level: u8) -> Vec2 {
        let radius = f32::from(level.min(100)) / 100.0 * self.max_radius;
        Vec2::from_polar(self.center, radius, Self::angle(index, count))
    }

    /// Vertices of the skill polygon
    pub fn points(&self, skills: &[Skill]) -> Vec<Vec2> {
        skills
            .iter()
            .enumerate()
            .map(|(i, s)| self.point(i, skills.len(), s.level))
            .collect()
    }

    /// SVG path of the skill polygon: `M x y L x y ... Z`
    ///
    /// Empty when there are no skills.
    pub fn path(&self, skills: &[Skill]) -> String {
        let mut path = String::new();
        for (i, p) in self.points(skills).iter().enumerate() {
            let command = if i == 0 { "M" } else { "L" };
            if i > 0 {
                path.push(' ');
            }
            path.push_str(&format!("{} {} {}", command, p.x, p.y));
        }
        if !path.is_empty() {
            path.push_str(" Z");
        }
        path
    }

    /// Radii of the concentric grid rings
    pub fn rings(&self) -> [f32; 5] {
        RING_LEVELS.map(|level| f32::from(level) / 100.0 * self.max_radius)
    }

    /// Outer end of every spoke
    pub fn spokes(&self, count: usize) -> Vec<Vec2> {
        (0..count)
            .map(|i| Vec2::from_polar(self.center, self.max_radius, Self::angle(i, count)))
            .collect()
    }

    /// Label anchor for every spoke
    pub fn label_positions(&self, count: usize) -> Vec<Vec2> {
        let radius = self.max_radius + LABEL_OFFSET;
        (0..count)
            .map(|i| Vec2::from_polar(self.center, radius, Self::angle(i, count)))
            .collect()
    }
}

/// Which category the radar shows
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillsPanel {
    selected: &'static SkillCategory,
}

impl Default for SkillsPanel {
    fn default() -> Self {
        Self {
            selected: &SKILL_CATEGORIES[0],
        }
    }
}

impl SkillsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category by id; unknown ids leave the selection unchanged
    pub fn select(&mut self, id: &str) -> bool {
        match skill_category(id) {
            Some(category) => {
                self.selected = category;
                true
            }
            None => {
                log::warn!("Unknown skill category: {}", id);
                false
            }
        }
    }

    pub fn selected(&self) -> &'static SkillCategory {
        self.selected
    }

    pub fn categories(&self) -> &'static [SkillCategory] {
        SKILL_CATEGORIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 0.001
    }

    #[test]
    fn test_first_point_at_top() {
        let chart = RadarChart::default();
        assert!(approx(chart.point(0, 6, 100), Vec2::new(150.0, 30.0)));
        assert!(approx(chart.point(0, 6, 50), Vec2::new(150.0, 90.0)));
    }

    #[test]
    fn test_quarter_turns_with_four_spokes() {
        let chart = RadarChart::default();
        assert!(approx(chart.point(1, 4, 100), Vec2::new(270.0, 150.0)));
        assert!(approx(chart.point(2, 4, 100), Vec2::new(150.0, 270.0)));
        assert!(approx(chart.point(3, 4, 100), Vec2::new(30.0, 150.0)));
    }

    #[test]
    fn test_level_zero_is_center() {
        let chart = RadarChart::default();
        assert!(approx(chart.point(3, 6, 0), chart.center));
    }

    #[test]
    fn test_path_shape() {
        let chart = RadarChart::default();
        let skills = SKILL_CATEGORIES[0].skills;
        let path = chart.path(skills);

        assert!(path.starts_with("M "));
        assert!(path.ends_with(" Z"));
        assert_eq!(path.matches(" L ").count(), skills.len() - 1);
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(RadarChart::default().path(&[]), "");
    }

    #[test]
    fn test_rings_and_labels() {
        let chart = RadarChart::default();
        assert_eq!(chart.rings(), [24.0, 48.0, 72.0, 96.0, 120.0]);
        let labels = chart.label_positions(6);
        assert_eq!(labels.len(), 6);
        assert!(approx(labels[0], Vec2::new(150.0, 0.0)));
        assert_eq!(chart.spokes(6).len(), 6);
    }

    #[test]
    fn test_panel_selection() {
        let mut panel = SkillsPanel::new();
        assert_eq!(panel.selected().id, "frontend");
        assert!(panel.select("tools"));
        assert_eq!(panel.selected().title, "Tools & Technologies");
        assert!(!panel.select("nope"));
        assert_eq!(panel.selected().id, "tools");
    }
}
