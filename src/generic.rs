use std::marker::{PhantomData};

use super::model::{type_name_of};

/// Returns `value` unchanged.
pub fn identity<K>(value: K) -> K { value }

/// Returns `a` if `flag` is `true`, otherwise `b`.
pub fn select_by_flag<K>(a: K, b: K, flag: bool) -> K { if flag { a } else { b } }

// ----------------------------------------------------------------------------

/// Generic methods callable on an instance or on the type.
#[derive(Debug, Default, Copy, Clone)]
pub struct SampleClass;

impl SampleClass {
    pub fn gen_method<K>(&self, arg: K) -> K { identity(arg) }

    pub fn gen_method_with_mixed_args<K>(&self, arg1: K, arg2: K, tf: bool) -> K {
        select_by_flag(arg1, arg2, tf)
    }

    pub fn gen_static_method<K>(arg: K) -> K { identity(arg) }

    pub fn gen_static_method_with_mixed_args<K>(arg1: K, arg2: K, tf: bool) -> K {
        select_by_flag(arg1, arg2, tf)
    }
}

// ----------------------------------------------------------------------------

/// A class generic over `T` whose methods are in turn generic over `K`.
pub struct SampleGenericClass<T>(PhantomData<fn(T)>);

impl<T> SampleGenericClass<T> {
    pub fn new() -> Self { Self(PhantomData) }

    /// Names the types of both arguments, e.g. `"i32, &str"`.
    pub fn parameterized_gen_method<K>(&self, cls_param: T, arg: K) -> String {
        Self::parameterized_static_gen_method(cls_param, arg)
    }

    /// Generic over its own `K`, independent of the class's `T`.
    pub fn gen_method<K>(&self, arg: K) -> K { identity(arg) }

    pub fn gen_static_method<K>(arg: K) -> K { identity(arg) }

    pub fn gen_static_method_with_mixed_args<K>(arg1: K, arg2: K, tf: bool) -> K {
        select_by_flag(arg1, arg2, tf)
    }

    pub fn parameterized_static_gen_method<K>(_cls_param: T, _arg: K) -> String {
        format!("{}, {}", type_name_of::<T>(), type_name_of::<K>())
    }
}

impl<T> Default for SampleGenericClass<T> {
    fn default() -> Self { Self::new() }
}

impl<T> std::fmt::Debug for SampleGenericClass<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SampleGenericClass<{}>", type_name_of::<T>())
    }
}

// ----------------------------------------------------------------------------
