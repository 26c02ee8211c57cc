use trj_time::CalendarPoint;
use trj_wind::{SnapshotChain, WindError, WindSample};

use crate::IntegrateError;

/// One hour's full per-station wind field, plus the chain position it came
/// from so the window can be slid further without re-searching from the
/// start.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSlot {
    pub time: CalendarPoint,
    pub index: usize,
    pub samples: Vec<WindSample>,
}

/// The two-slot sliding window over a [`SnapshotChain`] and the pair of
/// hourly-interpolated fields derived from it.
///
/// `earlier`/`later` are fixed by absolute calendar time, not by travel
/// direction: `earlier.time < later.time` always holds. `forward` alone
/// decides which edge of the window the particle is walking away from,
/// and therefore which way the window slides and which hourly slot
/// stands in for "now" when the sub-hour fraction is exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegratorState {
    pub earlier: DataSlot,
    pub later: DataSlot,
    /// Sub-hour distance from `earlier`, in hours: `0 <= diff <= data_diff`.
    pub diff: i64,
    /// Hour span currently separating `earlier` and `later`.
    pub data_diff: i64,
    /// The later-hour field ("next integer hour").
    pub current_next: Vec<WindSample>,
    /// The earlier-hour field ("previous integer hour").
    pub current_prev: Vec<WindSample>,
    forward: bool,
    res: i32,
}

impl IntegratorState {
    pub fn forward(&self) -> bool {
        self.forward
    }

    /// Process one hour-boundary crossing: roll the hourly slots forward,
    /// step `diff`, slide the data-slot window if it has been exhausted,
    /// and recompute the new "next integer hour" field.
    pub fn advance(&mut self, chain: &SnapshotChain) -> Result<(), IntegrateError> {
        self.current_prev = std::mem::take(&mut self.current_next);

        if self.forward {
            self.diff += 1;
        } else {
            self.diff -= 1;
        }

        let window_exhausted = if self.forward {
            self.diff == self.data_diff
        } else {
            self.diff == -1
        };
        if window_exhausted {
            self.slide(chain)?;
        }

        self.current_next = hourly_interpolate(
            &self.earlier.samples,
            &self.later.samples,
            self.diff,
            self.data_diff,
        );
        Ok(())
    }

    fn slide(&mut self, chain: &SnapshotChain) -> Result<(), IntegrateError> {
        if self.forward {
            let (next_index, span) = chain.next_nonempty(self.later.index)?;
            self.earlier = std::mem::replace(&mut self.later, load_slot(chain, next_index));
            self.data_diff = span;
            self.diff = 0;
        } else {
            let (prev_index, span) = chain.prev_nonempty(self.earlier.index)?;
            self.later = std::mem::replace(&mut self.earlier, load_slot(chain, prev_index));
            self.data_diff = span;
            self.diff = self.data_diff - 1;
        }
        check_resolution(self.data_diff, self.res)
    }
}

/// Build the initial window: find the start time's snapshot (stepping to
/// the nearest non-empty neighbor if it is a hole), then the next
/// non-empty snapshot in the direction of travel, and compute the first
/// "next integer hour" field from them.
pub fn init(
    chain: &SnapshotChain,
    start: CalendarPoint,
    forward: bool,
    res: i32,
) -> Result<IntegratorState, IntegrateError> {
    let start_index = chain.index_of(start).ok_or(WindError::ChainExhausted)?;

    let (anchor_index, skipped) = if chain.get(start_index).is_empty() {
        if forward {
            chain.prev_nonempty(start_index)?
        } else {
            chain.next_nonempty(start_index)?
        }
    } else {
        (start_index, 0)
    };

    let (earlier_index, later_index, diff, data_diff) = if forward {
        let (later_index, span) = chain.next_nonempty(anchor_index)?;
        (anchor_index, later_index, skipped, span)
    } else {
        let (earlier_index, span) = chain.prev_nonempty(anchor_index)?;
        (earlier_index, anchor_index, span - skipped, span)
    };

    check_resolution(data_diff, res)?;

    let earlier = load_slot(chain, earlier_index);
    let later = load_slot(chain, later_index);
    let current_next = hourly_interpolate(&earlier.samples, &later.samples, diff, data_diff);
    // Left empty: the stepper's very first micro-step always falls on an
    // hour boundary and calls `advance` before reading `current_prev`,
    // which freezes this initial `current_next` into it.
    let current_prev = Vec::new();

    Ok(IntegratorState {
        earlier,
        later,
        diff,
        data_diff,
        current_next,
        current_prev,
        forward,
        res,
    })
}

fn load_slot(chain: &SnapshotChain, index: usize) -> DataSlot {
    let snapshot = chain.get(index);
    DataSlot {
        time: snapshot.time,
        index,
        samples: snapshot
            .samples
            .clone()
            .expect("next_nonempty/prev_nonempty only ever return non-empty indices"),
    }
}

fn hourly_interpolate(
    earlier: &[WindSample],
    later: &[WindSample],
    diff: i64,
    data_diff: i64,
) -> Vec<WindSample> {
    earlier
        .iter()
        .zip(later.iter())
        .map(|(e, l)| {
            if diff == 0 {
                if e.present { *e } else { WindSample::absent() }
            } else if e.present && l.present {
                let d = data_diff as f64;
                let delta = diff as f64;
                WindSample::new(
                    e.u * (d - delta) / d + l.u * delta / d,
                    e.v * (d - delta) / d + l.v * delta / d,
                )
            } else {
                WindSample::absent()
            }
        })
        .collect()
}

fn check_resolution(data_diff: i64, res: i32) -> Result<(), IntegrateError> {
    if data_diff == 0 || data_diff > 24 {
        return Err(IntegrateError::Wind(WindError::DataResolution {
            hours: data_diff as i32,
            expected: res,
        }));
    }
    if res != 0 && i64::from(res) != data_diff {
        return Err(IntegrateError::Wind(WindError::DataResolution {
            hours: data_diff as i32,
            expected: res,
        }));
    }
    Ok(())
}
