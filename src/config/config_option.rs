/// A configuration value, together with the bounds within which the value may be set.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds.
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }

    /// Whether the value is within the bounds of the option.
    pub fn admits(&self, value: &T) -> bool {
        &self.min <= value && value <= &self.max
    }
}
