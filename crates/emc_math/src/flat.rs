//! Flat component access shared by the vector and matrix types
//!
//! Every type in this crate is `#[repr(C)]` over `f32` and `Pod`, so it can be
//! viewed as a fixed-size float array in declaration (column-major) order.
//! This is what gets handed to a graphics backend.

/// Implements flat array views, checked indexing, `Display` and array/slice
/// conversions for a `Pod` type made of `$n` floats.
macro_rules! impl_flat_access {
    ($t:ty, $n:literal) => {
        impl $t {
            /// Number of float components
            pub const COMPONENTS: usize = $n;

            /// View the components as a flat array in column-major order
            #[inline]
            pub fn as_array(&self) -> &[f32; $n] {
                bytemuck::cast_ref(self)
            }

            /// Mutable flat view of the components
            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut(self)
            }

            #[inline]
            pub fn as_slice(&self) -> &[f32] {
                self.as_array()
            }

            /// Copy the components out as a flat array
            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                *self.as_array()
            }
        }

        impl std::ops::Index<usize> for $t {
            type Output = f32;

            /// Panics if `index` is out of range.
            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.as_array()[index]
            }
        }

        impl std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.as_array_mut()[index]
            }
        }

        impl From<[f32; $n]> for $t {
            #[inline]
            fn from(values: [f32; $n]) -> Self {
                bytemuck::cast(values)
            }
        }

        impl From<$t> for [f32; $n] {
            #[inline]
            fn from(value: $t) -> Self {
                value.to_array()
            }
        }

        impl TryFrom<&[f32]> for $t {
            type Error = $crate::error::LengthError;

            fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
                $crate::error::LengthError::check($n, values.len())?;
                let mut out = <$t as bytemuck::Zeroable>::zeroed();
                out.as_array_mut().copy_from_slice(values);
                Ok(out)
            }
        }

        /// Comma-separated components; honours the formatter's precision.
        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                for (i, value) in self.as_slice().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    std::fmt::Display::fmt(value, f)?;
                }
                Ok(())
            }
        }
    };
}

pub(crate) use impl_flat_access;
