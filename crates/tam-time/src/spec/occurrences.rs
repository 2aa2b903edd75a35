//! `Occurrences`: the lazy cursor returned by `iterate_over`.

use super::annual::AnnualDateSpecification;
use super::DateSpecification;
use crate::date::CalendarDate;
use crate::interval::CalendarInterval;
use tam_core::errors::Result;

/// How the cursor finds the date after the current one.
#[derive(Clone, Debug)]
enum Stepper {
    /// Walk forward one day at a time, testing each day.
    Daily(DateSpecification),
    /// Jump straight to the same rule's date in the following year.
    Yearly(AnnualDateSpecification),
}

#[derive(Clone, Copy, Debug)]
enum State {
    Seeded(Option<CalendarDate>),
    After(CalendarDate),
    Done,
}

/// Dates satisfying a specification inside an interval, earliest first.
///
/// The next date is computed only when asked for.  A failure (a year in
/// which an annual rule's date does not exist) is yielded once as an `Err`
/// item, after which the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Occurrences {
    stepper: Stepper,
    interval: CalendarInterval,
    state: State,
}

impl Occurrences {
    pub(crate) fn daily(
        spec: DateSpecification,
        interval: CalendarInterval,
        seed: Option<CalendarDate>,
    ) -> Self {
        Self {
            stepper: Stepper::Daily(spec),
            interval,
            state: State::Seeded(seed),
        }
    }

    pub(crate) fn yearly(
        spec: AnnualDateSpecification,
        interval: CalendarInterval,
        seed: Option<CalendarDate>,
    ) -> Self {
        Self {
            stepper: Stepper::Yearly(spec),
            interval,
            state: State::Seeded(seed),
        }
    }

    pub(crate) fn empty(spec: DateSpecification) -> Self {
        Self {
            stepper: Stepper::Daily(spec),
            interval: CalendarInterval::unbounded(),
            state: State::Done,
        }
    }

    fn following(&self, previous: CalendarDate) -> Result<Option<CalendarDate>> {
        match &self.stepper {
            Stepper::Daily(spec) => {
                let mut candidate = previous.next_day();
                while let Some(day) = candidate.filter(|d| self.interval.includes(*d)) {
                    if spec.is_satisfied_by(day) {
                        return Ok(Some(day));
                    }
                    candidate = day.next_day();
                }
                Ok(None)
            }
            Stepper::Yearly(spec) => {
                if previous.year() >= CalendarDate::MAX_YEAR {
                    return Ok(None);
                }
                let next = spec.of_year(previous.year() + 1)?;
                Ok(self.interval.includes(next).then_some(next))
            }
        }
    }
}

impl Iterator for Occurrences {
    type Item = Result<CalendarDate>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = match std::mem::replace(&mut self.state, State::Done) {
            State::Done => return None,
            State::Seeded(seed) => Ok(seed),
            State::After(previous) => self.following(previous),
        };
        match found {
            Ok(Some(date)) => {
                self.state = State::After(date);
                Some(Ok(date))
            }
            Ok(None) => {
                log::trace!("occurrences in {} exhausted", self.interval);
                None
            }
            Err(e) => {
                log::debug!("occurrences in {} stopped: {e}", self.interval);
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Occurrences {}
