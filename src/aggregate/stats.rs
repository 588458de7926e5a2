#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterMetrics {
    pub absorbed: usize,
    pub exact_repeats: usize,
    pub widenings: usize,
    pub new_classes: usize,
}

impl CounterMetrics {
    pub fn record_exact_repeat(&mut self) {
        self.absorbed += 1;
        self.exact_repeats += 1;
    }

    pub fn record_widening(&mut self) {
        self.absorbed += 1;
        self.widenings += 1;
    }

    pub fn record_new_class(&mut self) {
        self.absorbed += 1;
        self.new_classes += 1;
    }

    pub fn combine(&mut self, other: &CounterMetrics) {
        self.absorbed += other.absorbed;
        self.exact_repeats += other.exact_repeats;
        self.widenings += other.widenings;
        self.new_classes += other.new_classes;
    }
}
