//! Applicative combination of independent remote values.
//!
//! Every arity is built on [`zip`], so the precedence between states is
//! defined in one place:
//!
//! 1. any `Failure` wins, and the leftmost failure is reported;
//! 2. otherwise `Loading` wins over `NotAsked`;
//! 3. otherwise every input succeeded and the transform runs.

use super::value::RemoteValue;

/// Pair two remote values, short-circuiting on the worst state.
pub fn zip<A, B, E>(a: RemoteValue<A, E>, b: RemoteValue<B, E>) -> RemoteValue<(A, B), E> {
    match (a, b) {
        (RemoteValue::Success(a), RemoteValue::Success(b)) => RemoteValue::Success((a, b)),
        (RemoteValue::Failure(e), _) | (_, RemoteValue::Failure(e)) => RemoteValue::Failure(e),
        (RemoteValue::Loading, _) | (_, RemoteValue::Loading) => RemoteValue::Loading,
        _ => RemoteValue::NotAsked,
    }
}

pub fn lift2<A, B, E, R>(
    f: impl FnOnce(A, B) -> R,
    a: RemoteValue<A, E>,
    b: RemoteValue<B, E>,
) -> RemoteValue<R, E> {
    zip(a, b).map(|(a, b)| f(a, b))
}

pub fn lift3<A, B, C, E, R>(
    f: impl FnOnce(A, B, C) -> R,
    a: RemoteValue<A, E>,
    b: RemoteValue<B, E>,
    c: RemoteValue<C, E>,
) -> RemoteValue<R, E> {
    zip(zip(a, b), c).map(|((a, b), c)| f(a, b, c))
}

pub fn lift4<A, B, C, D, E, R>(
    f: impl FnOnce(A, B, C, D) -> R,
    a: RemoteValue<A, E>,
    b: RemoteValue<B, E>,
    c: RemoteValue<C, E>,
    d: RemoteValue<D, E>,
) -> RemoteValue<R, E> {
    zip(zip(zip(a, b), c), d).map(|(((a, b), c), d)| f(a, b, c, d))
}

#[allow(clippy::too_many_arguments)]
pub fn lift5<A, B, C, D, G, E, R>(
    f: impl FnOnce(A, B, C, D, G) -> R,
    a: RemoteValue<A, E>,
    b: RemoteValue<B, E>,
    c: RemoteValue<C, E>,
    d: RemoteValue<D, E>,
    g: RemoteValue<G, E>,
) -> RemoteValue<R, E> {
    zip(zip(zip(zip(a, b), c), d), g).map(|((((a, b), c), d), g)| f(a, b, c, d, g))
}

/// Collect a dynamic number of remote values into one.
///
/// An empty input is an immediate success with an empty vector.
pub fn sequence<T, E>(values: impl IntoIterator<Item = RemoteValue<T, E>>) -> RemoteValue<Vec<T>, E> {
    values
        .into_iter()
        .fold(RemoteValue::of(Vec::new()), |acc, value| {
            zip(acc, value).map(|(mut items, item)| {
                items.push(item);
                items
            })
        })
}

/// Lift an N-ary function over N remote values, N from 2 to 5.
///
/// Dispatches to the matching `liftN` so closure argument types are
/// inferred from the inputs.
///
/// ```
/// use walletview::lift;
/// use walletview::remote::RemoteValue;
///
/// let a: RemoteValue<i32> = RemoteValue::of(1);
/// let b: RemoteValue<i32> = RemoteValue::of(2);
/// let c: RemoteValue<i32> = RemoteValue::of(3);
/// assert_eq!(lift!(|a, b, c| a + b + c; a, b, c), RemoteValue::of(6));
/// ```
#[macro_export]
macro_rules! lift {
    ($f:expr; $a:expr, $b:expr $(,)?) => {
        $crate::remote::lift2($f, $a, $b)
    };
    ($f:expr; $a:expr, $b:expr, $c:expr $(,)?) => {
        $crate::remote::lift3($f, $a, $b, $c)
    };
    ($f:expr; $a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::remote::lift4($f, $a, $b, $c, $d)
    };
    ($f:expr; $a:expr, $b:expr, $c:expr, $d:expr, $e:expr $(,)?) => {
        $crate::remote::lift5($f, $a, $b, $c, $d, $e)
    };
}


#[cfg(test)]
mod laws {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use std::cell::Cell;

    type Rv = RemoteValue<i32, String>;

    fn arb_remote() -> impl Strategy<Value = Rv> {
        prop_oneof![
            Just(RemoteValue::NotAsked),
            Just(RemoteValue::Loading),
            any::<u8>().prop_map(|n| RemoteValue::Failure(format!("error {n}"))),
            any::<i32>().prop_map(RemoteValue::Success),
        ]
    }

    /// Combined state computed over the whole input list at once.
    fn expected(values: &[Rv]) -> RemoteValue<Vec<i32>, String> {
        if let Some(error) = values.iter().find_map(RemoteValue::failure) {
            return RemoteValue::Failure(error.clone());
        }
        if values.iter().any(RemoteValue::is_loading) {
            return RemoteValue::Loading;
        }
        if values.iter().any(RemoteValue::is_not_asked) {
            return RemoteValue::NotAsked;
        }
        RemoteValue::of(values.iter().filter_map(|v| v.success().copied()).collect())
    }

    proptest! {
        #[test]
        fn sequence_follows_precedence(values in vec(arb_remote(), 0..8)) {
            prop_assert_eq!(sequence(values.clone()), expected(&values));
        }

        #[test]
        fn lift3_follows_precedence(a in arb_remote(), b in arb_remote(), c in arb_remote()) {
            let calls = Cell::new(0);
            let lifted = lift3(
                |a, b, c| {
                    calls.set(calls.get() + 1);
                    vec![a, b, c]
                },
                a.clone(),
                b.clone(),
                c.clone(),
            );
            let want = expected(&[a, b, c]);
            prop_assert_eq!(calls.get(), usize::from(want.is_success()));
            prop_assert_eq!(lifted, want);
        }

        #[test]
        fn lift4_follows_precedence(values in vec(arb_remote(), 4)) {
            let [a, b, c, d] = <[Rv; 4]>::try_from(values.clone()).unwrap();
            let lifted = lift4(|a, b, c, d| vec![a, b, c, d], a, b, c, d);
            prop_assert_eq!(lifted, expected(&values));
        }

        #[test]
        fn lift5_follows_precedence(values in vec(arb_remote(), 5)) {
            let [a, b, c, d, e] = <[Rv; 5]>::try_from(values.clone()).unwrap();
            let calls = Cell::new(0);
            let lifted = lift5(
                |a, b, c, d, e| {
                    calls.set(calls.get() + 1);
                    vec![a, b, c, d, e]
                },
                a,
                b,
                c,
                d,
                e,
            );
            let want = expected(&values);
            prop_assert_eq!(calls.get(), usize::from(want.is_success()));
            prop_assert_eq!(lifted, want);
        }

        #[test]
        fn macro_matches_lift5(values in vec(arb_remote(), 5)) {
            let [a, b, c, d, e] = <[Rv; 5]>::try_from(values.clone()).unwrap();
            let lifted = crate::lift!(|a, b, c, d, e| vec![a, b, c, d, e]; a, b, c, d, e);
            prop_assert_eq!(lifted, expected(&values));
        }

        #[test]
        fn lift_of_values_is_of_result(a in any::<i32>(), b in any::<i32>()) {
            let f = |a: i32, b: i32| a.wrapping_sub(b);
            prop_assert_eq!(lift2(f, Rv::of(a), Rv::of(b)), Rv::of(f(a, b)));
        }

        #[test]
        fn zip_is_associative_in_state(a in arb_remote(), b in arb_remote(), c in arb_remote()) {
            let left = zip(zip(a.clone(), b.clone()), c.clone()).map(|((a, b), c)| (a, b, c));
            let right = zip(a, zip(b, c)).map(|(a, (b, c))| (a, b, c));
            prop_assert_eq!(left, right);
        }
    }
}
