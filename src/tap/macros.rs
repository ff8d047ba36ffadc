/// Generates the staged setter and committed getter for one `DeviceState` field.
macro_rules! impl_state_field {
    ($field:ident: $type:ty) => {
        paste::paste! {
            #[doc = "Stages a new `" $field "`; it becomes visible on [`commit`](Self::commit)."]
            #[inline]
            pub fn [<set_ $field>](&mut self, value: $type) {
                self.pending.$field = value;
                self.dirty = true;
            }

            #[doc = "Committed `" $field "`. Never reflects staged edits."]
            #[inline]
            pub fn $field(&self) -> $type {
                self.current.$field
            }
        }
    };
}

/// Generates accessors for every `DeviceState` field.
macro_rules! impl_state_fields {
    () => {
        impl_state_field!(arm: ArmState);
        impl_state_field!(clock_mode: ClockMode);
        impl_state_field!(run_state: RunState);
        impl_state_field!(error: bool);
    };
}

/// `tracing::debug!` when the `tracing` feature is enabled, nothing otherwise.
macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)+);
    }};
}

/// `tracing::trace!` when the `tracing` feature is enabled, nothing otherwise.
macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)+);
    }};
}

pub(crate) use debug;
pub(crate) use impl_state_field;
pub(crate) use impl_state_fields;
pub(crate) use trace;
