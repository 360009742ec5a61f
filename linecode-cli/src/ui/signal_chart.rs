use linecode::{
    Timeline,
    TimelinePoint,
    VoltageLevel,
};
use ratatui::{
    buffer::Buffer,
    layout::{
        Constraint,
        Rect,
    },
    style::{
        Color,
        Style,
    },
    symbols::Marker,
    widgets::{
        Axis,
        Block,
        Chart,
        Dataset,
        GraphType,
        LegendPosition,
        Widget,
    },
};

/// Minimum number of columns per time axis label.
const COLUMNS_PER_LABEL: u16 = 4;

/// Stepped plot of an encoded signal.
#[derive(Debug)]
pub struct SignalChart<'a> {
    pub timeline: &'a Timeline,
    pub color: Color,
}

impl<'a> Widget for SignalChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered();
        let inner = block.inner(area);

        // the chart widget connects points with straight lines, so we hand it
        // the step corners instead of the raw samples.
        let data = self
            .timeline
            .stepped()
            .iter()
            .map(TimelinePoint::as_xy)
            .collect::<Vec<_>>();

        let (time_bounds, time_labels) =
            time_axis(self.timeline, usize::from(inner.width / COLUMNS_PER_LABEL));
        let volt_labels = volt_axis(usize::from(inner.height.saturating_sub(2)));

        let dataset = Dataset::default()
            .name("Digital Signal")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.color))
            .data(&data);

        Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Time (t)")
                    .bounds(time_bounds)
                    .labels(time_labels),
            )
            .y_axis(
                Axis::default()
                    .title("Volts (V)")
                    .bounds([
                        VoltageLevel::MIN_VOLTS.into(),
                        VoltageLevel::MAX_VOLTS.into(),
                    ])
                    .labels(volt_labels),
            )
            .legend_position(Some(LegendPosition::Top))
            .hidden_legend_constraints((Constraint::Min(0), Constraint::Min(0)))
            .render(area, buf);
    }
}

/// Bounds and labels of the time axis.
///
/// Ratatui spreads labels evenly over the axis. The labelled ticks sit on whole
/// time units and are labelled with their time, so if there are too many of
/// them we keep every n-th one and stretch the axis a bit so that the last kept
/// label still lands on the end.
fn time_axis(timeline: &Timeline, max_labels: usize) -> ([f64; 2], Vec<String>) {
    let time_base = timeline.time_base();
    let ticks = (0..timeline.len())
        .filter_map(|tick| time_base.tick_label(tick))
        .collect::<Vec<_>>();

    let (Some(&first), Some(&last)) = (ticks.first(), ticks.last())
    else {
        return ([0.0, 1.0], vec![]);
    };

    if first == last {
        return ([first as f64, first as f64 + 1.0], vec![first.to_string()]);
    }

    let stride = (last - first).div_ceil(max_labels.max(2) - 1).max(1);
    let span = (last - first).div_ceil(stride) * stride;
    let labels = (0..=span)
        .step_by(stride)
        .map(|offset| (first + offset).to_string())
        .collect();

    ([first as f64, (first + span) as f64], labels)
}

/// Integer volt labels, every volt if there is room, otherwise only the three
/// levels.
fn volt_axis(rows: usize) -> Vec<String> {
    let step = if rows > 2 * (VoltageLevel::MAX_VOLTS - VoltageLevel::MIN_VOLTS) as usize {
        1
    }
    else {
        VoltageLevel::AMPLITUDE as usize
    };

    (VoltageLevel::MIN_VOLTS..=VoltageLevel::MAX_VOLTS)
        .step_by(step)
        .map(|volts| volts.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use linecode::Scheme;
    use ratatui::{
        buffer::Buffer,
        layout::Rect,
        style::Color,
        widgets::Widget,
    };

    use crate::ui::signal_chart::{
        SignalChart,
        time_axis,
        volt_axis,
    };

    #[test]
    fn manchester_axis_is_labelled_with_bit_numbers() {
        let timeline = linecode::encode(Scheme::Manchester, "101");
        let (bounds, labels) = time_axis(&timeline, 100);
        assert_eq!(bounds, [0.0, 3.0]);
        assert_eq!(labels, ["0", "1", "2", "3"]);
    }

    #[test]
    fn level_codes_start_at_one() {
        let timeline = linecode::encode(Scheme::NrzI, "101");
        let (bounds, labels) = time_axis(&timeline, 100);
        assert_eq!(bounds, [1.0, 4.0]);
        assert_eq!(labels, ["1", "2", "3", "4"]);
    }

    #[test]
    fn long_inputs_get_thinned_labels() {
        let timeline = linecode::encode(Scheme::NrzL, &"1".repeat(20));
        let (bounds, labels) = time_axis(&timeline, 5);
        assert!(labels.len() <= 5, "{labels:?}");
        assert_eq!(labels.first().map(String::as_str), Some("1"));
        // the stretched axis still ends on the last label
        assert_eq!(labels.last().unwrap().parse::<f64>().unwrap(), bounds[1]);
        assert!(bounds[1] >= 21.0);
    }

    #[test]
    fn empty_timeline_has_no_labels() {
        let timeline = linecode::encode(Scheme::Bipolar, "");
        let (_, labels) = time_axis(&timeline, 10);
        assert!(labels.is_empty());
    }

    #[test]
    fn volt_axis_shrinks_when_short() {
        assert_eq!(volt_axis(40).len(), 11);
        assert_eq!(volt_axis(5), ["-5", "0", "5"]);
    }

    #[test]
    fn it_renders_the_axis_titles() {
        let timeline = linecode::encode(Scheme::Pseudoternary, "0101");
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        SignalChart {
            timeline: &timeline,
            color: Color::Blue,
        }
        .render(area, &mut buf);

        let text = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_owned())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Volts (V)"), "{text}");
        assert!(text.contains("Time (t)"), "{text}");
        assert!(text.contains("Digital Signal"), "{text}");
    }
}
