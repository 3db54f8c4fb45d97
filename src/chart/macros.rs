//! Macros for terse chart construction.

/// Build a `Vec` of unguarded transitions from a compact table.
///
/// Each row reads `from on EVENT => to`. Rows keep their declaration order,
/// which is the candidate-event priority order during search. Attach guards
/// or context actions with the builder API when a row needs them.
///
/// # Example
///
/// ```
/// use statepath::chart::ChartBuilder;
/// use statepath::transitions;
///
/// let chart = ChartBuilder::new()
///     .initial("a")
///     .context(())
///     .transitions(transitions! {
///         "a" on "NEXT" => "b",
///         "b" on "NEXT" => "c",
///     })
///     .build()
///     .unwrap();
/// # let _ = chart;
/// ```
#[macro_export]
macro_rules! transitions {
    ($($from:literal on $event:literal => $to:literal),* $(,)?) => {
        vec![
            $($crate::chart::Transition::new($from, $event, $to)),*
        ]
    };
}
