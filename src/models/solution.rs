//! Solution type and its textual form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Tour;
use crate::error::{ParseError, ParseResult};

/// An assignment of vertices to vehicles: one [`Tour`] per vehicle slot.
///
/// No disjointness or coverage invariant is enforced; problems decide what
/// they accept.
///
/// The textual form is the tour count on the first line, then one line per
/// tour with each vertex followed by a space.
///
/// # Examples
///
/// ```
/// use u_mtsp::models::Solution;
///
/// let sol = Solution::from(vec![vec![0, 2], vec![], vec![1]]);
/// assert_eq!(sol.num_tours(), 3);
/// assert_eq!(sol.num_used(), 2);
/// assert_eq!(sol.to_string(), "3\n0 2 \n\n1 \n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    tours: Vec<Tour>,
}

impl Solution {
    /// Creates a solution with no tours.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solution from tours.
    pub fn from_tours(tours: Vec<Tour>) -> Self {
        Self { tours }
    }

    /// Adds a tour to this solution.
    pub fn push(&mut self, tour: Tour) {
        self.tours.push(tour);
    }

    /// Returns the tours in this solution.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Number of tours, empty ones included.
    pub fn num_tours(&self) -> usize {
        self.tours.len()
    }

    /// Number of non-empty tours (vehicles actually used).
    pub fn num_used(&self) -> usize {
        self.tours.iter().filter(|t| !t.is_empty()).count()
    }

    /// Total number of vertex visits across all tours.
    pub fn num_visits(&self) -> usize {
        self.tours.iter().map(|t| t.len()).sum()
    }

    /// Iterates over the non-empty tours.
    pub fn used_tours(&self) -> impl Iterator<Item = &Tour> {
        self.tours.iter().filter(|t| !t.is_empty())
    }
}

impl From<Vec<Vec<usize>>> for Solution {
    fn from(tours: Vec<Vec<usize>>) -> Self {
        Self::from_tours(tours.into_iter().map(Tour::new).collect())
    }
}

impl FromIterator<Tour> for Solution {
    fn from_iter<T: IntoIterator<Item = Tour>>(iter: T) -> Self {
        Self::from_tours(iter.into_iter().collect())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tours.len())?;
        for tour in &self.tours {
            for v in tour.vertices() {
                write!(f, "{v} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Solution {
    type Err = ParseError;

    /// Parses the textual form. Lines past the declared tour count must be
    /// blank.
    fn from_str(s: &str) -> ParseResult<Self> {
        let mut lines = s.lines();
        let header = lines
            .next()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(ParseError::UnexpectedEnd {
                expected: "tour count",
            })?;
        let declared: usize = header.parse().map_err(|_| ParseError::InvalidNumber {
            token: header.to_string(),
        })?;

        let rows: Vec<&str> = lines.collect();
        let extra = rows.iter().skip(declared).filter(|l| !l.trim().is_empty()).count();
        if rows.len() < declared || extra > 0 {
            return Err(ParseError::TourCount {
                declared,
                found: rows.len().min(declared) + extra,
            });
        }

        rows.iter()
            .take(declared)
            .map(|line| {
                line.split_whitespace()
                    .map(|t| {
                        t.parse::<usize>().map_err(|_| ParseError::InvalidNumber {
                            token: t.to_string(),
                        })
                    })
                    .collect::<ParseResult<Vec<usize>>>()
                    .map(Tour::new)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_tours(), 0);
        assert_eq!(sol.num_used(), 0);
        assert_eq!(sol.num_visits(), 0);
        assert_eq!(sol.to_string(), "0\n");
    }

    #[test]
    fn test_solution_counts() {
        let mut sol = Solution::from(vec![vec![0, 1, 2], vec![]]);
        sol.push(Tour::new(vec![3]));
        assert_eq!(sol.num_tours(), 3);
        assert_eq!(sol.num_used(), 2);
        assert_eq!(sol.num_visits(), 4);
        assert_eq!(sol.used_tours().count(), 2);
    }

    #[test]
    fn test_display_keeps_input_order() {
        let sol = Solution::from(vec![vec![4, 1], vec![0]]);
        assert_eq!(sol.to_string(), "2\n4 1 \n0 \n");
    }

    #[test]
    fn test_parse_textual_form() {
        let sol: Solution = "3\n0 2 \n\n1 \n".parse().expect("valid");
        assert_eq!(sol, Solution::from(vec![vec![0, 2], vec![], vec![1]]));
    }

    #[test]
    fn test_parse_without_trailing_space_or_newline() {
        let sol: Solution = "2\n0 1\n2 3".parse().expect("valid");
        assert_eq!(sol, Solution::from(vec![vec![0, 1], vec![2, 3]]));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<Solution>(),
            Err(ParseError::UnexpectedEnd {
                expected: "tour count"
            })
        );
        assert_eq!(
            "3\n0 1\n".parse::<Solution>(),
            Err(ParseError::TourCount {
                declared: 3,
                found: 1
            })
        );
        assert_eq!(
            "1\n0\n1\n".parse::<Solution>(),
            Err(ParseError::TourCount {
                declared: 1,
                found: 2
            })
        );
        assert!(matches!(
            "1\n0 a\n".parse::<Solution>(),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_serde_json() {
        let sol = Solution::from(vec![vec![0, 1], vec![]]);
        let json = serde_json::to_string(&sol).expect("serialize");
        assert_eq!(json, r#"{"tours":[[0,1],[]]}"#);
        let back: Solution = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, sol);
    }
}
