#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $tol:expr) => {{
        match (&$left, &$right, &$tol) {
            (left_val, right_val, tol_val) => {
                if !(left_val.fuzzy_eq_tol(*right_val, *tol_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_tol(right, tol)`
  left: `{:?}`,
 right: `{:?}`
 tol: `{:?}`"#,
                        &*left_val, &*right_val, &*tol_val
                    )
                }
            }
        }
    }};
}

#[macro_export]
macro_rules! pline {
    ( $( $x:expr ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut pl = $crate::polyline::Polyline::new();
            $(
                pl.add($x.0, $x.1);
            )*
            pl
        }
    };
}
