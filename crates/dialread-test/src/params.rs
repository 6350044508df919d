//! Regression test parameters and operations

use dialread_core::{LabelGrid, Measurement};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and report failures (default)
    #[default]
    Compare,
    /// Also print intermediate results for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of the
/// current check, the mode, and every failure seen so far. Checks never
/// panic; call [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "polar")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two measurements
    ///
    /// Both must be undetermined, or both determined and within `delta`.
    pub fn compare_measurement(
        &mut self,
        expected: Measurement,
        actual: Measurement,
        delta: f64,
    ) -> bool {
        match (expected.value(), actual.value()) {
            (Some(e), Some(a)) => self.compare_values(e, a, delta),
            (None, None) => {
                self.index += 1;
                true
            }
            _ => {
                self.index += 1;
                let msg = format!(
                    "Failure in {}_reg: measurement comparison for index {}\n\
                     expected = {:?}, actual = {:?}",
                    self.test_name, self.index, expected, actual
                );
                self.fail(msg);
                false
            }
        }
    }

    /// Compare two label grids for exact equality
    pub fn compare_grids(&mut self, grid1: &LabelGrid, grid2: &LabelGrid) -> bool {
        self.index += 1;

        if grid1.dimensions() != grid2.dimensions() {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            self.fail(msg);
            return false;
        }

        let width = grid1.width();
        for y in 0..grid1.height() {
            for x in 0..width {
                if grid1.get_unchecked(x, y) != grid2.get_unchecked(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: grid comparison for index {} - label mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two byte strings (e.g. serialized results)
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
