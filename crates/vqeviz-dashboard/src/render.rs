//! The dashboard as an ordered list of blocks.
//!
//! Rendering is a pure function of the loaded results and the toggle states.
//! Every interaction re-runs it from scratch; nothing is cached between
//! renders. The HTML page, the JSON API and the terminal view all consume the
//! same [`Dashboard`].

use serde::Serialize;
use serde_json::Value;
use vqeviz_results::{LoadError, LoadedResults, round_to, running_average};

use crate::charts::{ChartSpec, SeriesColor, backend_name};
use crate::dto::Toggles;
use crate::state::RenderOptions;

pub const TITLE: &str = "Quantum Simulation - VQE Visualization";

/// Energy unit shown next to every value.
pub const ENERGY_UNIT: &str = "Hartree";

/// One displayable unit of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Heading { text: String },
    Subheading { text: String },
    Paragraph { text: String },
    /// Labelled value, e.g. "Total Iterations: 100".
    Summary {
        label: String,
        value: String,
        unit: Option<String>,
    },
    /// The results file exactly as stored.
    RawJson { value: Value },
    /// The sidebar controls and their current state.
    Controls { toggles: Toggles },
    Chart { chart: ChartSpec },
    /// Simulated optimization progress: `steps` ticks, `step_delay_ms` apart.
    Progress { steps: u64, step_delay_ms: u64 },
    Bullet { label: String, text: String },
    /// Blocking error; nothing else is rendered alongside it.
    Error { kind: String, message: String },
}

/// A rendered dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Toggle states the dashboard was rendered with.
    pub toggles: Toggles,
    /// Chart backend selected by the toggles.
    pub backend: &'static str,
    pub blocks: Vec<Block>,
}

impl Dashboard {
    /// Charts in display order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart { chart } => Some(chart),
            _ => None,
        })
    }

    /// Chart ids in display order.
    pub fn chart_ids(&self) -> Vec<&str> {
        self.charts().map(|c| c.id.as_str()).collect()
    }

    /// The blocking error, if this dashboard is a failure page.
    pub fn error(&self) -> Option<&Block> {
        self.blocks.iter().find(|b| matches!(b, Block::Error { .. }))
    }

    /// Whether the dashboard shows a blocking error.
    pub fn is_failure(&self) -> bool {
        self.error().is_some()
    }
}

/// Chart ids.
pub mod chart_id {
    pub const CONVERGENCE: &str = "convergence";
    pub const DISTRIBUTION: &str = "distribution";
    pub const RUNNING_AVERAGE: &str = "running-average";
}

/// Render the dashboard for successfully loaded results.
pub fn render_dashboard(
    loaded: &LoadedResults,
    toggles: &Toggles,
    options: &RenderOptions,
) -> Dashboard {
    let doc = &loaded.document;
    let energies = &doc.energy_convergence;
    let mut blocks = Vec::with_capacity(32);

    blocks.push(Block::Title {
        text: TITLE.to_string(),
    });
    blocks.push(heading("Understanding Quantum Simulation"));
    blocks.push(paragraph(
        "This dashboard visualizes the process of finding the ground-state energy using the VQE \
         algorithm. Ground-state energy is the lowest possible energy state of a quantum system \
         and is essential in understanding molecular stability, reaction dynamics, and quantum \
         computing optimizations.",
    ));

    blocks.push(heading("Input Data (Quantum Results)"));
    blocks.push(Block::RawJson {
        value: loaded.raw.clone(),
    });

    blocks.push(Block::Controls { toggles: *toggles });

    blocks.push(heading("Ground-State Energy Calculation"));
    blocks.push(summary(
        "Computed Ground-State Energy",
        format!("{:.6}", doc.ground_state_energy),
        Some(ENERGY_UNIT),
    ));
    blocks.push(summary("Total Iterations", doc.iterations.to_string(), None));

    blocks.push(heading("Energy Convergence Over Iterations"));
    blocks.push(paragraph(
        "This graph shows how the energy approaches the optimal ground-state value over \
         iterations, ensuring the algorithm's convergence.",
    ));
    blocks.push(Block::Chart {
        chart: ChartSpec::line(
            chart_id::CONVERGENCE,
            "VQE Energy Convergence",
            "Energy Convergence",
            SeriesColor::Blue,
            energies.clone(),
        ),
    });

    if toggles.show_histogram {
        blocks.push(heading("Energy Distribution"));
        blocks.push(paragraph(
            "This histogram represents the spread of energy values encountered during \
             optimization, giving insight into the stability of calculations.",
        ));
        blocks.push(Block::Chart {
            chart: ChartSpec::histogram(
                chart_id::DISTRIBUTION,
                "Energy Distribution",
                SeriesColor::Blue,
                energies.clone(),
            ),
        });
    }

    if toggles.show_running_average {
        blocks.push(heading("Running Average of Energy"));
        blocks.push(paragraph(
            "This plot tracks how the energy stabilizes over time, helping to assess the \
             effectiveness of the optimization process.",
        ));
        blocks.push(Block::Chart {
            chart: ChartSpec::line(
                chart_id::RUNNING_AVERAGE,
                "Running Average of Energy",
                "Running Average",
                SeriesColor::Green,
                running_average(energies),
            ),
        });
    }

    blocks.push(Block::Subheading {
        text: "Energy Convergence Progress".to_string(),
    });
    blocks.push(paragraph(
        "This progress bar simulates the iterative optimization process, showing how the \
         algorithm progresses towards the optimal energy state.",
    ));
    blocks.push(Block::Progress {
        steps: doc.iterations,
        step_delay_ms: options.progress_step_delay.as_millis() as u64,
    });

    let final_energy = doc
        .final_energy()
        // `{:?}` keeps the trailing `.0` on whole values.
        .map(|e| format!("{:?}", round_to(e, 6)))
        .unwrap_or_else(|| "n/a".to_string());
    blocks.push(summary(
        "Final Computed Ground-State Energy",
        final_energy,
        Some(ENERGY_UNIT),
    ));
    blocks.push(summary(
        "Total Iterations Processed",
        doc.iterations.to_string(),
        None,
    ));

    push_conclusion(&mut blocks);

    tracing::debug!(
        backend = backend_name(toggles.interactive),
        histogram = toggles.show_histogram,
        running_average = toggles.show_running_average,
        blocks = blocks.len(),
        "rendered dashboard"
    );

    Dashboard {
        toggles: *toggles,
        backend: backend_name(toggles.interactive),
        blocks,
    }
}

/// Render the blocking error page for a failed load.
pub fn render_failure(error: &LoadError, toggles: &Toggles) -> Dashboard {
    Dashboard {
        toggles: *toggles,
        backend: backend_name(toggles.interactive),
        blocks: vec![Block::Error {
            kind: error.kind().to_string(),
            message: format!("Error: {error}"),
        }],
    }
}

fn push_conclusion(blocks: &mut Vec<Block>) {
    blocks.push(heading("Conclusion"));
    blocks.push(paragraph(
        "This quantum simulation successfully approximates the ground-state energy of a system \
         using the VQE algorithm. The visualizations help in understanding how the algorithm \
         converges towards the optimal solution, making quantum computations more accessible \
         and interpretable.",
    ));
    blocks.push(paragraph(
        "Ground-state energy is a critical metric in quantum mechanics, enabling advancements in:",
    ));
    for (label, text) in [
        ("Material Science", "Predicting the properties of new materials."),
        (
            "Chemistry",
            "Understanding molecular structures and reaction pathways.",
        ),
        (
            "Quantum Computing",
            "Optimizing quantum circuits for better performance.",
        ),
    ] {
        blocks.push(Block::Bullet {
            label: label.to_string(),
            text: text.to_string(),
        });
    }
    blocks.push(paragraph(
        "This showcases how quantum algorithms can solve real-world problems efficiently.",
    ));
}

fn heading(text: &str) -> Block {
    Block::Heading {
        text: text.to_string(),
    }
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph {
        text: text.to_string(),
    }
}

fn summary(label: &str, value: String, unit: Option<&str>) -> Block {
    Block::Summary {
        label: label.to_string(),
        value,
        unit: unit.map(String::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn loaded(value: Value) -> LoadedResults {
        LoadedResults::from_value(value, PathBuf::from("quantum_results.json")).unwrap()
    }

    fn summary_value(dashboard: &Dashboard, label: &str) -> Option<String> {
        dashboard.blocks.iter().find_map(|b| match b {
            Block::Summary { label: l, value, .. } if l == label => Some(value.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_default_toggles_show_all_charts() {
        let d = render_dashboard(&loaded(json!({})), &Toggles::default(), &RenderOptions::default());
        assert_eq!(
            d.chart_ids(),
            vec![chart_id::CONVERGENCE, chart_id::DISTRIBUTION, chart_id::RUNNING_AVERAGE]
        );
        assert_eq!(d.backend, "plotly");
        assert!(!d.is_failure());
    }

    #[test]
    fn test_block_order() {
        let d = render_dashboard(&loaded(json!({})), &Toggles::default(), &RenderOptions::default());
        let kinds: Vec<&str> = d
            .blocks
            .iter()
            .map(|b| match b {
                Block::Title { .. } => "title",
                Block::RawJson { .. } => "raw",
                Block::Controls { .. } => "controls",
                Block::Chart { .. } => "chart",
                Block::Progress { .. } => "progress",
                Block::Summary { .. } => "summary",
                Block::Bullet { .. } => "bullet",
                _ => "text",
            })
            .filter(|k| *k != "text")
            .collect();
        assert_eq!(
            kinds,
            vec![
                "title", "raw", "controls", "summary", "summary", "chart", "chart", "chart",
                "progress", "summary", "summary", "bullet", "bullet", "bullet",
            ]
        );
    }

    #[test]
    fn test_summaries() {
        let d = render_dashboard(
            &loaded(json!({
                "ground_state_energy": -1.1372838,
                "iterations": 3,
                "energy_convergence": [0.2, -0.9, -1.13728349]
            })),
            &Toggles::default(),
            &RenderOptions::default(),
        );
        assert_eq!(summary_value(&d, "Computed Ground-State Energy").unwrap(), "-1.137284");
        assert_eq!(summary_value(&d, "Total Iterations").unwrap(), "3");
        assert_eq!(summary_value(&d, "Final Computed Ground-State Energy").unwrap(), "-1.137283");
        assert_eq!(summary_value(&d, "Total Iterations Processed").unwrap(), "3");
    }

    #[test]
    fn test_default_energy_is_zero_with_six_places() {
        let d = render_dashboard(&loaded(json!({})), &Toggles::default(), &RenderOptions::default());
        assert_eq!(summary_value(&d, "Computed Ground-State Energy").unwrap(), "0.000000");
        assert_eq!(summary_value(&d, "Final Computed Ground-State Energy").unwrap(), "-0.886786");
    }

    #[test]
    fn test_whole_final_energy_keeps_decimal_point() {
        for (energy, shown) in [(-1.0, "-1.0"), (0.0, "0.0"), (-1.1372834, "-1.137283")] {
            let d = render_dashboard(
                &loaded(json!({ "energy_convergence": [0.5, energy] })),
                &Toggles::default(),
                &RenderOptions::default(),
            );
            assert_eq!(
                summary_value(&d, "Final Computed Ground-State Energy").unwrap(),
                shown
            );
        }
    }

    #[test]
    fn test_empty_sequence_final_energy() {
        let d = render_dashboard(
            &loaded(json!({ "energy_convergence": [] })),
            &Toggles::default(),
            &RenderOptions::default(),
        );
        assert_eq!(summary_value(&d, "Final Computed Ground-State Energy").unwrap(), "n/a");
    }

    #[test]
    fn test_toggles_are_independent() {
        let doc = loaded(json!({ "iterations": 10 }));
        let opts = RenderOptions::default();

        let no_hist = Toggles {
            show_histogram: false,
            ..Toggles::default()
        };
        assert_eq!(
            render_dashboard(&doc, &no_hist, &opts).chart_ids(),
            vec![chart_id::CONVERGENCE, chart_id::RUNNING_AVERAGE]
        );

        let no_avg = Toggles {
            show_running_average: false,
            ..Toggles::default()
        };
        assert_eq!(
            render_dashboard(&doc, &no_avg, &opts).chart_ids(),
            vec![chart_id::CONVERGENCE, chart_id::DISTRIBUTION]
        );

        let neither = Toggles {
            show_histogram: false,
            show_running_average: false,
            interactive: true,
        };
        assert_eq!(
            render_dashboard(&doc, &neither, &opts).chart_ids(),
            vec![chart_id::CONVERGENCE]
        );
    }

    #[test]
    fn test_backend_toggle_keeps_chart_data() {
        let doc = loaded(json!({ "energy_convergence": [0.3, -0.2, -0.7] }));
        let opts = RenderOptions::default();
        let interactive = render_dashboard(&doc, &Toggles::default(), &opts);
        let fixed = render_dashboard(
            &doc,
            &Toggles {
                interactive: false,
                ..Toggles::default()
            },
            &opts,
        );
        assert_eq!(fixed.backend, "svg");
        let a: Vec<_> = interactive.charts().collect();
        let b: Vec<_> = fixed.charts().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_running_average_chart_values() {
        let d = render_dashboard(
            &loaded(json!({ "energy_convergence": [1.0, 3.0, 5.0] })),
            &Toggles::default(),
            &RenderOptions::default(),
        );
        let avg = d.charts().find(|c| c.id == chart_id::RUNNING_AVERAGE).unwrap();
        assert_eq!(avg.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_progress_uses_declared_iterations() {
        let d = render_dashboard(
            &loaded(json!({ "iterations": 40, "energy_convergence": [0.1, 0.2] })),
            &Toggles::default(),
            &RenderOptions::default(),
        );
        let progress = d.blocks.iter().find_map(|b| match b {
            Block::Progress { steps, step_delay_ms } => Some((*steps, *step_delay_ms)),
            _ => None,
        });
        assert_eq!(progress, Some((40, 10)));
        let conv = d.charts().next().unwrap();
        assert_eq!(conv.values().len(), 2);
    }

    #[test]
    fn test_failure_has_no_charts() {
        let err = LoadError::MissingInputFile {
            path: PathBuf::from("quantum_results.json"),
        };
        let d = render_failure(&err, &Toggles::default());
        assert!(d.is_failure());
        assert_eq!(d.charts().count(), 0);
        assert_eq!(d.blocks.len(), 1);
        match d.error().unwrap() {
            Block::Error { kind, message } => {
                assert_eq!(kind, "missing_input_file");
                assert_eq!(message, "Error: quantum_results.json file not found!");
            }
            other => panic!("unexpected block {other:?}"),
        }
    }
}
