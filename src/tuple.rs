//! Fixed-arity typed tuples for sequence results
//!
//! Sequences produce native Rust tuples. Joining two sequences concatenates
//! their tuples through [`Concat`], so every element keeps its type and its
//! left-to-right position. Arity is capped at 8.

pub type Tuple0 = ();
pub type Tuple1<A> = (A,);
pub type Tuple2<A, B> = (A, B);
pub type Tuple3<A, B, C> = (A, B, C);
pub type Tuple4<A, B, C, D> = (A, B, C, D);
pub type Tuple5<A, B, C, D, E> = (A, B, C, D, E);
pub type Tuple6<A, B, C, D, E, F> = (A, B, C, D, E, F);
pub type Tuple7<A, B, C, D, E, F, G> = (A, B, C, D, E, F, G);
pub type Tuple8<A, B, C, D, E, F, G, H> = (A, B, C, D, E, F, G, H);

/// A tuple usable as a sequence result
pub trait Tuple: Clone + 'static {
    const ARITY: usize;
}

/// Positional concatenation of two tuples
pub trait Concat<Rhs: Tuple>: Tuple {
    type Output: Tuple;

    fn concat(self, rhs: Rhs) -> Self::Output;
}

macro_rules! count {
    () => { 0 };
    ($head:ident $($tail:ident)*) => { 1 + count!($($tail)*) };
}

macro_rules! impl_tuple {
    ($($name:ident)*) => {
        impl<$($name: Clone + 'static),*> Tuple for ($($name,)*) {
            const ARITY: usize = count!($($name)*);
        }
    };
}

impl_tuple!();
impl_tuple!(A);
impl_tuple!(A B);
impl_tuple!(A B C);
impl_tuple!(A B C D);
impl_tuple!(A B C D E);
impl_tuple!(A B C D E F);
impl_tuple!(A B C D E F G);
impl_tuple!(A B C D E F G H);

macro_rules! impl_concat {
    ([$($l:ident)*] [$($r:ident)*]) => {
        impl<$($l: Clone + 'static,)* $($r: Clone + 'static,)*> Concat<($($r,)*)> for ($($l,)*) {
            type Output = ($($l,)* $($r,)*);

            #[allow(non_snake_case, clippy::unused_unit)]
            fn concat(self, rhs: ($($r,)*)) -> Self::Output {
                let ($($l,)*) = self;
                let ($($r,)*) = rhs;
                ($($l,)* $($r,)*)
            }
        }
    };
}

// For a fixed left side, implement every right side from the empty tuple up
// to the widest one that keeps the total within 8 elements.
macro_rules! impl_concat_rights {
    ([$($l:ident)*] [$($taken:ident)*]) => {
        impl_concat!([$($l)*] [$($taken)*]);
    };
    ([$($l:ident)*] [$($taken:ident)*] $next:ident $($rest:ident)*) => {
        impl_concat!([$($l)*] [$($taken)*]);
        impl_concat_rights!([$($l)*] [$($taken)* $next] $($rest)*);
    };
}

impl_concat_rights!([] [] R1 R2 R3 R4 R5 R6 R7 R8);
impl_concat_rights!([L1] [] R1 R2 R3 R4 R5 R6 R7);
impl_concat_rights!([L1 L2] [] R1 R2 R3 R4 R5 R6);
impl_concat_rights!([L1 L2 L3] [] R1 R2 R3 R4 R5);
impl_concat_rights!([L1 L2 L3 L4] [] R1 R2 R3 R4);
impl_concat_rights!([L1 L2 L3 L4 L5] [] R1 R2 R3);
impl_concat_rights!([L1 L2 L3 L4 L5 L6] [] R1 R2);
impl_concat_rights!([L1 L2 L3 L4 L5 L6 L7] [] R1);
impl_concat_rights!([L1 L2 L3 L4 L5 L6 L7 L8] []);
