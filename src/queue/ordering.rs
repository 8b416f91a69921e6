//! Job ordering rules and the engine that composes them.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::types::PrintJob;

/// A scoring rule used to order print jobs.
///
/// Lower scores print earlier.
///
/// # Examples
///
/// ```
/// use u_cutqueue::queue::{JobOrdering, OrderingRule, PrintJob};
///
/// // Shortest id first, purely for illustration.
/// struct ShortId;
///
/// impl OrderingRule for ShortId {
///     fn name(&self) -> &str { "ShortId" }
///     fn score(&self, job: &PrintJob) -> f64 { job.id.len() as f64 }
/// }
///
/// let ordering = JobOrdering::by_priority().with_rule(ShortId);
/// assert_eq!(ordering.rule_names(), vec!["Priority", "ShortId"]);
/// ```
pub trait OrderingRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the ordering score of a job.
    fn score(&self, job: &PrintJob) -> f64;

    /// Returns an exact integer key, if the rule has one.
    ///
    /// Rules with an exact key are compared on it directly and never
    /// through `score` and the engine's epsilon.
    fn exact_key(&self, _job: &PrintJob) -> Option<i64> {
        None
    }
}

/// Ascending job priority, compared exactly as `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByPriority;

impl OrderingRule for ByPriority {
    fn name(&self) -> &str {
        "Priority"
    }

    fn score(&self, job: &PrintJob) -> f64 {
        job.priority as f64
    }

    fn exact_key(&self, job: &PrintJob) -> Option<i64> {
        Some(job.priority)
    }
}

/// Shorter print time first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPrintTime;

impl OrderingRule for ShortestPrintTime {
    fn name(&self) -> &str {
        "ShortestPrintTime"
    }

    fn score(&self, job: &PrintJob) -> f64 {
        job.print_time
    }
}

/// Larger volume first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestVolume;

impl OrderingRule for LargestVolume {
    fn name(&self) -> &str {
        "LargestVolume"
    }

    fn score(&self, job: &PrintJob) -> f64 {
        -job.volume
    }
}

/// Per-rule sort key of one job.
#[derive(Debug, Clone, Copy)]
enum RuleKey {
    Exact(i64),
    /// Score rounded to a multiple of epsilon.
    Approx(f64),
}

impl RuleKey {
    fn of(rule: &dyn OrderingRule, job: &PrintJob, epsilon: f64) -> Self {
        match rule.exact_key(job) {
            Some(key) => RuleKey::Exact(key),
            None => {
                let score = rule.score(job);
                let bucket = if epsilon > 0.0 {
                    (score / epsilon).round()
                } else {
                    score
                };
                // -0.0 and 0.0 must land in the same bucket.
                RuleKey::Approx(bucket + 0.0)
            }
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (RuleKey::Exact(a), RuleKey::Exact(b)) => a.cmp(b),
            (RuleKey::Approx(a), RuleKey::Approx(b)) => a.total_cmp(b),
            (RuleKey::Exact(_), RuleKey::Approx(_)) => Ordering::Less,
            (RuleKey::Approx(_), RuleKey::Exact(_)) => Ordering::Greater,
        }
    }
}

/// Sequential composition of ordering rules.
///
/// Rules are consulted in order; a later rule only decides between two
/// jobs when every earlier rule ties. Rules with an
/// [`exact_key`](OrderingRule::exact_key) tie only on equal keys. Float
/// scores tie when they round to the same multiple of `epsilon`, which
/// keeps the comparison a total order. Jobs tied on every rule keep
/// their input order.
#[derive(Clone)]
pub struct JobOrdering {
    rules: Vec<Arc<dyn OrderingRule>>,
    epsilon: f64,
}

impl JobOrdering {
    /// Creates an ordering with no rules, which keeps input order.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Creates the default ordering: ascending priority only.
    pub fn by_priority() -> Self {
        Self::new().with_rule(ByPriority)
    }

    /// Appends a rule consulted after the existing ones.
    pub fn with_rule<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the bucket width for floating-point scores. Exact keys ignore it.
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns indices into `jobs` in print order.
    ///
    /// The sort is stable.
    pub fn sort_indices(&self, jobs: &[PrintJob]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }

        let keys: Vec<Vec<RuleKey>> = jobs
            .iter()
            .map(|job| {
                self.rules
                    .iter()
                    .map(|r| RuleKey::of(r.as_ref(), job, self.epsilon))
                    .collect()
            })
            .collect();

        indices.sort_by(|&a, &b| {
            keys[a]
                .iter()
                .zip(&keys[b])
                .map(|(ka, kb)| ka.compare(kb))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        indices
    }

    /// Returns references to `jobs` in print order.
    pub fn sort<'a>(&self, jobs: &'a [PrintJob]) -> Vec<&'a PrintJob> {
        self.sort_indices(jobs)
            .into_iter()
            .map(|i| &jobs[i])
            .collect()
    }
}

impl Default for JobOrdering {
    fn default() -> Self {
        Self::by_priority()
    }
}

impl fmt::Debug for JobOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobOrdering")
            .field("rules", &self.rule_names())
            .field("epsilon", &self.epsilon)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(jobs: &[&PrintJob]) -> Vec<String> {
        jobs.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let jobs = vec![
            PrintJob::new("A", 1.0, 2, 1.0),
            PrintJob::new("B", 1.0, 1, 1.0),
            PrintJob::new("C", 1.0, 2, 1.0),
            PrintJob::new("D", 1.0, 1, 1.0),
        ];
        let sorted = JobOrdering::by_priority().sort(&jobs);
        assert_eq!(ids(&sorted), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_no_rules_keeps_input_order() {
        let jobs = vec![
            PrintJob::new("A", 1.0, 3, 1.0),
            PrintJob::new("B", 1.0, 1, 1.0),
        ];
        assert_eq!(JobOrdering::new().sort_indices(&jobs), vec![0, 1]);
    }

    #[test]
    fn test_secondary_rule_breaks_ties() {
        let jobs = vec![
            PrintJob::new("A", 1.0, 1, 30.0),
            PrintJob::new("B", 1.0, 1, 10.0),
            PrintJob::new("C", 1.0, 0, 50.0),
        ];
        let ordering = JobOrdering::by_priority().with_rule(ShortestPrintTime);
        assert_eq!(ids(&ordering.sort(&jobs)), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_largest_volume_first() {
        let jobs = vec![
            PrintJob::new("small", 10.0, 1, 1.0),
            PrintJob::new("large", 90.0, 1, 1.0),
        ];
        let ordering = JobOrdering::by_priority().with_rule(LargestVolume);
        assert_eq!(ids(&ordering.sort(&jobs)), vec!["large", "small"]);
    }

    #[test]
    fn test_negative_priorities() {
        let jobs = vec![
            PrintJob::new("A", 1.0, 0, 1.0),
            PrintJob::new("B", 1.0, -5, 1.0),
        ];
        assert_eq!(JobOrdering::default().sort_indices(&jobs), vec![1, 0]);
    }

    #[test]
    fn test_epsilon_ties_fall_through() {
        let jobs = vec![
            PrintJob::new("A", 1.0, 1, 1.0 + 1e-12),
            PrintJob::new("B", 5.0, 1, 1.0),
        ];
        let ordering = JobOrdering::new()
            .with_rule(ShortestPrintTime)
            .with_rule(LargestVolume);
        assert_eq!(ids(&ordering.sort(&jobs)), vec!["B", "A"]);
    }

    #[test]
    fn test_priorities_beyond_f64_precision() {
        let base = 1i64 << 53;
        let jobs = vec![
            PrintJob::new("later", 1.0, base + 1, 1.0),
            PrintJob::new("earlier", 1.0, base, 1.0),
        ];
        let ordering = JobOrdering::by_priority().with_rule(LargestVolume);
        assert_eq!(ids(&ordering.sort(&jobs)), vec!["earlier", "later"]);
    }

    #[test]
    fn test_near_tie_chain_sorts_consistently() {
        // Scores 0.6 apart with epsilon 1.0: pairwise "within epsilon"
        // would not be transitive. Buckets keep a total order.
        let jobs: Vec<PrintJob> = (0..40)
            .map(|i| {
                let time = (i * 6 % 23) as f64 * 0.6;
                PrintJob::new(format!("J{i}"), 1.0 + (i % 7) as f64, 1, time)
            })
            .collect();
        let ordering = JobOrdering::by_priority()
            .with_rule(ShortestPrintTime)
            .with_rule(LargestVolume)
            .with_epsilon(1.0);
        let sorted = ordering.sort(&jobs);
        assert_eq!(sorted.len(), jobs.len());
        for pair in sorted.windows(2) {
            assert!(pair[0].print_time.round() <= pair[1].print_time.round());
        }
    }

    #[test]
    fn test_zero_volume_signs_share_bucket() {
        let jobs = vec![
            PrintJob::new("A", 0.0, 1, 2.0),
            PrintJob::new("B", -0.0, 1, 1.0),
        ];
        let ordering = JobOrdering::new()
            .with_rule(LargestVolume)
            .with_rule(ShortestPrintTime);
        assert_eq!(ids(&ordering.sort(&jobs)), vec!["B", "A"]);
    }

    #[test]
    fn test_rule_names_and_debug() {
        let ordering = JobOrdering::by_priority().with_rule(LargestVolume);
        assert_eq!(ordering.rule_names(), vec!["Priority", "LargestVolume"]);
        assert_eq!(ordering.rule_count(), 2);
        assert!(format!("{ordering:?}").contains("LargestVolume"));
    }
}
