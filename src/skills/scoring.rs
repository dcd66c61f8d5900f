//! Weighted quality score for a skill

use std::fmt;

use serde::Serialize;

/// Scored aspects of a skill, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FileStructure,
    Frontmatter,
    SpecCompliance,
    DescriptionQuality,
    ProgressiveDisclosure,
    MainInstructions,
    TestingInvocation,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::FileStructure,
        Category::Frontmatter,
        Category::SpecCompliance,
        Category::DescriptionQuality,
        Category::ProgressiveDisclosure,
        Category::MainInstructions,
        Category::TestingInvocation,
    ];

    /// Share of the total score. Weights sum to 1.0.
    pub fn weight(self) -> f64 {
        match self {
            Category::FileStructure => 0.10,
            Category::Frontmatter => 0.15,
            Category::SpecCompliance => 0.15,
            Category::DescriptionQuality => 0.20,
            Category::ProgressiveDisclosure => 0.20,
            Category::MainInstructions => 0.10,
            Category::TestingInvocation => 0.10,
        }
    }
}

/// Score for one category, 0 to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
}

/// Running score for a category. Starts at 100 and never drops below 0.
#[derive(Debug, Clone, Copy)]
pub struct Score(i32);

impl Score {
    pub fn full() -> Self {
        Score(100)
    }

    pub fn zero() -> Self {
        Score(0)
    }

    pub fn deduct(&mut self, points: i32) {
        self.0 -= points;
    }

    pub fn value(self) -> u32 {
        u32::try_from(self.0.clamp(0, 100)).unwrap_or(0)
    }
}

/// Weighted total of the category scores
pub fn weighted_total(scores: &[CategoryScore]) -> f64 {
    scores
        .iter()
        .map(|s| f64::from(s.score) * s.category.weight())
        .sum()
}

/// Letter grade for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = Category::ALL.iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_score(100.0), Grade::A);
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(89.9), Grade::B);
        assert_eq!(Grade::from_score(80.0), Grade::B);
        assert_eq!(Grade::from_score(70.0), Grade::C);
        assert_eq!(Grade::from_score(69.5), Grade::D);
        assert_eq!(Grade::from_score(60.0), Grade::D);
        assert_eq!(Grade::from_score(59.0), Grade::F);
        assert_eq!(Grade::from_score(0.0), Grade::F);
    }

    #[test]
    fn score_floors_at_zero() {
        let mut score = Score::full();
        score.deduct(30);
        score.deduct(30);
        score.deduct(50);
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn weighted_total_of_perfect_scores() {
        let scores: Vec<CategoryScore> = Category::ALL
            .iter()
            .map(|&category| CategoryScore {
                category,
                score: 100,
            })
            .collect();
        assert!((weighted_total(&scores) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn weighted_total_single_category_loss() {
        let scores: Vec<CategoryScore> = Category::ALL
            .iter()
            .map(|&category| CategoryScore {
                category,
                score: if category == Category::DescriptionQuality { 50 } else { 100 },
            })
            .collect();
        assert!((weighted_total(&scores) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn grade_display() {
        assert_eq!(Grade::B.to_string(), "B");
    }
}
