use std::{collections::VecDeque, time::Instant};

/// Rolling statistics over the last `max_num_samples` frame build times.
pub struct FrameTimer {
    samples: VecDeque<f64>,
    current_mean: f64,
    current_min: f64,
    current_max: f64,
    last_start: Instant,
    max_num_samples: usize,
}

impl FrameTimer {
    pub fn new(max_num_samples: usize) -> Self {
        Self {
            samples: VecDeque::new(),
            current_mean: 0.0,
            current_min: 0.0,
            current_max: 0.0,
            last_start: Instant::now(),
            max_num_samples: max_num_samples.max(1),
        }
    }

    pub fn start(&mut self) {
        self.last_start = Instant::now();
    }

    /// Records the milliseconds elapsed since the last `start`.
    pub fn stop(&mut self) {
        let millis = self.last_start.elapsed().as_micros() as f64 / 1000.0;
        self.add_sample(millis);
    }

    pub fn add_sample(&mut self, millis: f64) {
        self.samples.push_back(millis);
        if self.samples.len() > self.max_num_samples {
            self.samples.pop_front();
        }

        let mut sum_samples = 0.0;
        self.current_max = f64::MIN;
        self.current_min = f64::MAX;
        for sample in &self.samples {
            sum_samples += sample;
            self.current_max = f64::max(self.current_max, *sample);
            self.current_min = f64::min(self.current_min, *sample);
        }
        self.current_mean = sum_samples / self.samples.len() as f64;
    }

    pub fn mean(&self) -> f64 {
        self.current_mean
    }

    pub fn min(&self) -> f64 {
        self.current_min
    }

    pub fn max(&self) -> f64 {
        self.current_max
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
