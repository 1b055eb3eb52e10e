//! Per-packet handling timings, reported alongside the host's own timings.

use std::collections::HashMap;
use std::time::Duration;

/// Accumulated timings for one packet id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingStats {
    pub count: u64,
    pub total: Duration,
    pub max: Duration,
}

impl TimingStats {
    pub fn record(&mut self, elapsed: Duration) {
        self.count += 1;
        self.total += elapsed;
        self.max = self.max.max(elapsed);
    }

    pub fn average(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        match u32::try_from(self.count) {
            Ok(count) => self.total / count,
            Err(_) => self.total.div_f64(self.count as f64),
        }
    }
}

/// Timings of claimed packet handling, keyed by packet id.
#[derive(Debug, Default)]
pub struct HandlerTimings {
    by_packet: HashMap<u32, TimingStats>,
}

impl HandlerTimings {
    pub fn record(&mut self, packet_id: u32, elapsed: Duration) {
        self.by_packet.entry(packet_id).or_default().record(elapsed);
    }

    pub fn get(&self, packet_id: u32) -> Option<&TimingStats> {
        self.by_packet.get(&packet_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &TimingStats)> {
        self.by_packet.iter().map(|(id, stats)| (*id, stats))
    }

    pub fn reset(&mut self) {
        self.by_packet.clear();
    }
}
