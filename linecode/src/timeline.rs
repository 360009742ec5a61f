//! Sample-to-time projection
//!
//! Places the samples of a [`SampleSequence`] on the time axis according to
//! the scheme's [`TimeBase`].

use std::ops::Deref;

use crate::{
    level::VoltageLevel,
    samples::SampleSequence,
    scheme::TimeBase,
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelinePoint {
    pub time: f64,
    pub voltage: VoltageLevel,
}

impl TimelinePoint {
    #[inline]
    pub fn new(time: f64, voltage: VoltageLevel) -> Self {
        Self { time, voltage }
    }

    #[inline]
    pub fn as_xy(&self) -> (f64, f64) {
        (self.time, self.voltage.into())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    time_base: TimeBase,
    points: Vec<TimelinePoint>,
}

impl Timeline {
    #[inline]
    pub fn time_base(&self) -> TimeBase {
        self.time_base
    }

    #[inline]
    pub fn points(&self) -> &[TimelinePoint] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<TimelinePoint> {
        self.points
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.time)
    }

    /// Time of the first and last point.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.time, last.time))
    }

    /// Corner points of the step plot.
    ///
    /// Each sample is held horizontally until the time of the next sample,
    /// where the line jumps vertically to the next level. Use this when the
    /// plotting backend only connects points with straight lines.
    pub fn stepped(&self) -> Vec<TimelinePoint> {
        let mut corners = Vec::with_capacity(self.points.len() * 2);

        for window in self.points.windows(2) {
            let [current, next] = [window[0], window[1]];
            corners.push(current);
            if next.voltage != current.voltage {
                corners.push(TimelinePoint::new(next.time, current.voltage));
            }
        }
        corners.extend(self.points.last().copied());

        corners
    }
}

impl Deref for Timeline {
    type Target = [TimelinePoint];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelinePoint;
    type IntoIter = std::slice::Iter<'a, TimelinePoint>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Places sample `i` at `i + 1` (one sample per bit) or `i * 0.5` (two
/// samples per bit).
pub fn project(samples: &SampleSequence, time_base: TimeBase) -> Timeline {
    let points = samples
        .iter()
        .enumerate()
        .map(|(index, voltage)| TimelinePoint::new(time_base.sample_time(index), *voltage))
        .collect();

    Timeline { time_base, points }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{
        bits::BitSequence,
        level::VoltageLevel::{
            Positive as P,
            Zero as Z,
        },
        samples::SampleSequence,
        scheme::{
            Scheme,
            TimeBase,
        },
        timeline::{
            TimelinePoint,
            project,
        },
    };

    #[test]
    fn one_sample_per_bit_starts_at_one() {
        let samples = SampleSequence::from(vec![P, Z, Z]);
        let timeline = project(&samples, TimeBase::OneSamplePerBit);
        assert_eq!(timeline.times().collect::<Vec<_>>(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn two_samples_per_bit_start_at_zero() {
        let samples = SampleSequence::from(vec![Z, P, P, Z]);
        let timeline = project(&samples, TimeBase::TwoSamplesPerBit);
        let times = timeline.times().collect::<Vec<_>>();
        assert_eq!(times.len(), 4);
        for (time, expected) in times.into_iter().zip([0.0, 0.5, 1.0, 1.5]) {
            assert_relative_eq!(time, expected);
        }
    }

    #[test]
    fn empty_samples_project_to_an_empty_timeline() {
        let timeline = project(&SampleSequence::new(), TimeBase::TwoSamplesPerBit);
        assert!(timeline.is_empty());
        assert_eq!(timeline.time_range(), None);
        assert!(timeline.stepped().is_empty());
    }

    #[test]
    fn manchester_timeline_ends_on_the_bit_count() {
        let scheme = Scheme::Manchester;
        let samples = scheme.encode(&BitSequence::from("1011"));
        let timeline = project(&samples, scheme.time_base());
        assert_eq!(timeline.time_range(), Some((0.0, 4.0)));
    }

    #[test]
    fn stepped_holds_each_level_until_the_next_sample() {
        let samples = SampleSequence::from(vec![Z, P, P]);
        let timeline = project(&samples, TimeBase::OneSamplePerBit);
        assert_eq!(
            timeline.stepped(),
            vec![
                TimelinePoint::new(1.0, Z),
                TimelinePoint::new(2.0, Z),
                TimelinePoint::new(2.0, P),
                TimelinePoint::new(3.0, P),
            ]
        );
    }
}
