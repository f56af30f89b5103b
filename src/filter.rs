use crate::digest::DigestAlgorithm;
use crate::error::FilterError;
use crate::hash::iter_indices;
use crate::set_membership::SetMembership;
use crate::sizing;
use crate::store::{MembershipStore, INDEX_SPACE_LIMIT};
use std::convert::Infallible;
use std::fmt::{Debug, Formatter};
use tracing::{debug, warn};

pub const DEFAULT_EXPECTED_ITEMS: usize = 100;
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;
/// Default index space is this many times the expected item count.
pub const MAX_ITEMS_FACTOR: usize = 5;

/// How `contains` combines the derived indices of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// Present if any derived index is active. Matches the behavior of
    /// deployed filters; the observed false-positive rate is well above the
    /// sized one.
    #[default]
    Any,
    /// Present only if every derived index is active, the classic bloom filter
    /// rule the sizing formulas assume.
    All,
}

/// Construction options. Unset fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub expected_items: Option<usize>,
    pub max_items: Option<usize>,
    pub desired_false_positive_rate: Option<f64>,
    pub digest_algorithm: Option<String>,
    pub query_mode: Option<QueryMode>,
    /// Reject `expected_items == 0` and rates outside `(0, 1)` instead of
    /// letting them flow through the sizing formulas.
    pub strict: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    options: FilterOptions,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expected_items(mut self, expected_items: usize) -> Self {
        self.options.expected_items = Some(expected_items);
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.options.max_items = Some(max_items);
        self
    }

    pub fn false_positive_rate(mut self, rate: f64) -> Self {
        self.options.desired_false_positive_rate = Some(rate);
        self
    }

    pub fn digest_algorithm(mut self, name: impl Into<String>) -> Self {
        self.options.digest_algorithm = Some(name.into());
        self
    }

    pub fn query_mode(mut self, mode: QueryMode) -> Self {
        self.options.query_mode = Some(mode);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    pub fn build(self) -> Result<Filter, FilterError> {
        Filter::new(self.options)
    }
}

/// A bloom filter over strings whose hash functions are derived from a single
/// salted digest algorithm.
///
/// ```
/// use salted_bloom::Filter;
///
/// let mut filter = Filter::builder().expected_items(1000).build()?;
/// filter.add("alice");
/// assert!(filter.contains("alice"));
/// # Ok::<(), salted_bloom::FilterError>(())
/// ```
#[derive(Clone)]
pub struct Filter {
    store: MembershipStore,
    expected_items: usize,
    max_items: usize,
    num_functions: usize,
    algorithm: DigestAlgorithm,
    mode: QueryMode,
}

impl Filter {
    pub fn new(options: FilterOptions) -> Result<Self, FilterError> {
        let algorithm = match &options.digest_algorithm {
            Some(name) => name.parse()?,
            None => DigestAlgorithm::default(),
        };
        let expected_items = options.expected_items.unwrap_or(DEFAULT_EXPECTED_ITEMS);
        let max_items = options
            .max_items
            .unwrap_or_else(|| expected_items.saturating_mul(MAX_ITEMS_FACTOR));
        let rate = options
            .desired_false_positive_rate
            .unwrap_or(DEFAULT_FALSE_POSITIVE_RATE);
        let mode = options.query_mode.unwrap_or_default();

        if max_items == 0 {
            return Err(FilterError::InvalidParameters(
                "max_items must be > 0".to_owned(),
            ));
        }
        let in_domain = expected_items > 0 && 0. < rate && rate < 1.;
        if options.strict && !in_domain {
            return Err(FilterError::InvalidParameters(format!(
                "expected_items must be > 0 and false positive rate in the range (0, 1), \
                 got {expected_items} and {rate}"
            )));
        }
        if options.strict && max_items as u64 > INDEX_SPACE_LIMIT {
            return Err(FilterError::InvalidParameters(format!(
                "max_items must be <= {INDEX_SPACE_LIMIT}, got {max_items}"
            )));
        }

        let num_functions =
            sizing::number_of_functions(expected_items, rate, max_items).ok_or_else(|| {
                FilterError::InvalidParameters(format!(
                    "false positive rate {rate} yields a non-finite function count"
                ))
            })?;

        if !in_domain {
            warn!(
                expected_items,
                rate,
                num_functions,
                "filter sized from out-of-domain parameters"
            );
        }
        debug!(
            %algorithm,
            expected_items,
            max_items,
            num_functions,
            ?mode,
            "created filter"
        );

        Ok(Self::with_parameters(expected_items, max_items, num_functions, algorithm, mode))
    }

    fn with_parameters(
        expected_items: usize,
        max_items: usize,
        num_functions: usize,
        algorithm: DigestAlgorithm,
        mode: QueryMode,
    ) -> Self {
        Self {
            store: MembershipStore::new(max_items),
            expected_items,
            max_items,
            num_functions,
            algorithm,
            mode,
        }
    }

    pub fn builder() -> FilterBuilder {
        FilterBuilder::new()
    }

    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn number_of_functions(&self) -> usize {
        self.num_functions
    }

    pub fn digest_algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn query_mode(&self) -> QueryMode {
        self.mode
    }

    /// The derived index of every hash function for `value`, in function order.
    pub fn indices(&self, value: &str) -> Vec<usize> {
        iter_indices(self.algorithm, value, self.num_functions, self.max_items).collect()
    }

    pub fn add(&mut self, value: &str) {
        for index in iter_indices(self.algorithm, value, self.num_functions, self.max_items) {
            self.store.activate(index);
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        let mut indices = iter_indices(self.algorithm, value, self.num_functions, self.max_items);
        match self.mode {
            QueryMode::Any => indices.any(|index| self.store.is_active(index)),
            // A filter without functions never reports a value present.
            QueryMode::All => {
                self.num_functions > 0 && indices.all(|index| self.store.is_active(index))
            }
        }
    }

    pub fn count_active(&self) -> usize {
        self.store.count_active()
    }

    pub fn fill_ratio(&self) -> f64 {
        self.store.fill_ratio()
    }

    /// False-positive rate expected for the current fill under this filter's
    /// query mode.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        sizing::estimated_false_positive_rate(self.fill_ratio(), self.num_functions, self.mode)
    }
}

impl Default for Filter {
    fn default() -> Self {
        let expected_items = DEFAULT_EXPECTED_ITEMS;
        let max_items = expected_items * MAX_ITEMS_FACTOR;
        let num_functions =
            sizing::number_of_functions(expected_items, DEFAULT_FALSE_POSITIVE_RATE, max_items)
                .unwrap_or_default();
        Self::with_parameters(
            expected_items,
            max_items,
            num_functions,
            DigestAlgorithm::default(),
            QueryMode::default(),
        )
    }
}

impl SetMembership<str> for Filter {
    type InsertError = Infallible;

    fn contains(&self, item: &str) -> bool {
        Filter::contains(self, item)
    }

    fn insert(&mut self, item: &str) -> Result<(), Self::InsertError> {
        self.add(item);
        Ok(())
    }
}

impl Debug for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Filter {{ algorithm: {}, max_items: {}, num_functions: {}, mode: {:?}, active: {} }}",
            self.algorithm,
            self.max_items,
            self.num_functions,
            self.mode,
            self.count_active()
        )
    }
}
