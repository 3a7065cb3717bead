/// Implements a basic `Debug` trait for types using their type name.
///
/// Useful for types whose internals (boxed closures, erased views) have
/// nothing meaningful to print.
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}

/// Generates the `body` of a direct-emission view.
///
/// Views that override [`View::build`](crate::View::build) terminate the
/// recursive lowering; evaluating their `body` is a programmer error, so
/// the generated method fails fast with the concrete type name.
#[macro_export]
macro_rules! no_body {
    () => {
        #[allow(unreachable_code)]
        #[allow(clippy::needless_return)]
        fn body(self, _env: &$crate::Environment) -> impl $crate::View {
            panic!(
                "{} emits directly into the builder; its `body` must not be evaluated",
                core::any::type_name::<Self>()
            );
            return;
        }
    };
}

macro_rules! tuples {
    ($macro:ident) => {
        $macro!(T0);
        $macro!(T0, T1);
        $macro!(T0, T1, T2);
        $macro!(T0, T1, T2, T3);
        $macro!(T0, T1, T2, T3, T4);
        $macro!(T0, T1, T2, T3, T4, T5);
        $macro!(T0, T1, T2, T3, T4, T5, T6);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
    };
}
