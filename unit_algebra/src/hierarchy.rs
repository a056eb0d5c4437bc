/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Queries on the trees formed by named quantity specs.

use crate::expression::{Expr, Factor, Term};
use crate::quantity_spec::{NamedSpec, SpecInfo};

pub const fn hierarchy_path_length(spec: &NamedSpec) -> usize {
    let mut n = 0;
    let mut cur = spec;
    while let Some(parent) = cur.parent {
        cur = parent;
        n += 1;
    }
    n
}

/// Walk `steps` levels up the tree, stopping at the root.
pub const fn hierarchy_path_advance<'a>(spec: &'a NamedSpec, mut steps: usize) -> &'a NamedSpec {
    let mut cur = spec;
    while steps > 0 {
        cur = match cur.parent {
            Some(parent) => parent,
            None => return cur,
        };
        steps -= 1;
    }
    cur
}

pub const fn get_hierarchy_root(spec: &NamedSpec) -> &NamedSpec {
    let mut cur = spec;
    while let Some(parent) = cur.parent {
        cur = parent;
    }
    cur
}

pub const fn have_common_base(a: &NamedSpec, b: &NamedSpec) -> bool {
    get_hierarchy_root(a).eq(get_hierarchy_root(b))
}

/// Closest ancestor shared by two specs of the same tree.
pub const fn get_common_base<'a>(a: &'a NamedSpec, b: &'a NamedSpec) -> &'a NamedSpec {
    let (la, lb) = (hierarchy_path_length(a), hierarchy_path_length(b));
    let (mut a, mut b) = match la > lb {
        true => (hierarchy_path_advance(a, la - lb), b),
        false => (a, hierarchy_path_advance(b, lb - la)),
    };
    while !a.eq(b) {
        match (a.parent, b.parent) {
            (Some(pa), Some(pb)) => {
                a = pa;
                b = pb;
            }
            _ => panic!("quantities have no common base"),
        }
    }
    a
}

/// `child` lies strictly below `parent` in the same tree.
pub const fn is_child_of(child: &NamedSpec, parent: &NamedSpec) -> bool {
    let (lc, lp) = (hierarchy_path_length(child), hierarchy_path_length(parent));
    lc > lp && hierarchy_path_advance(child, lc - lp).eq(parent)
}

/// Nearest ancestor (or self) marked as a kind, else the tree root.
pub const fn named_kind_tree_root(spec: &NamedSpec) -> &NamedSpec {
    let mut cur = spec;
    loop {
        if cur.is_kind {
            return cur;
        }
        match cur.parent {
            Some(parent) => cur = parent,
            None => return cur,
        }
    }
}

pub const fn get_kind_tree_root(spec: &SpecInfo) -> SpecInfo {
    if spec.is_kind_of() {
        return spec.remove_kind();
    }
    let expr = spec.expr();
    let mut out = Expr::ONE;
    let mut i = 0;
    while i < expr.len() {
        let Term { factor, power } = expr.term(i);
        let factor = match factor {
            Factor::Spec(s) => Factor::Spec(named_kind_tree_root(s)),
            other => other,
        };
        out = out.mul_term(Term::new(factor, power));
        i += 1;
    }
    SpecInfo::from_expr(out)
}

/// The quantity kind a spec belongs to.
pub const fn get_kind(spec: &SpecInfo) -> SpecInfo {
    get_kind_tree_root(spec).kind_of()
}

/// How many times a spec can be expanded into its equation.
pub const fn named_complexity(spec: &NamedSpec) -> u32 {
    if spec.is_dimensionless() {
        return 0;
    }
    match &spec.equation {
        Some(equation) => 1 + expr_complexity(equation),
        None => 0,
    }
}

pub const fn expr_complexity(expr: &Expr) -> u32 {
    let mut max = 0;
    let mut i = 0;
    while i < expr.len() {
        if let Factor::Spec(s) = expr.term(i).factor {
            let c = named_complexity(s);
            if c > max {
                max = c;
            }
        }
        i += 1;
    }
    max
}

pub const fn get_complexity(spec: &SpecInfo) -> u32 {
    expr_complexity(spec.expr())
}

/// False for a child that only inherits its parent's equation.
pub const fn defines_equation(spec: &NamedSpec) -> bool {
    match (spec.parent, &spec.equation) {
        (Some(NamedSpec {
            equation: Some(parent_eq),
            ..
        }), Some(eq)) => !parent_eq.eq(eq),
        _ => true,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dimension::Dimension;
    use crate::quantity_spec::DIMENSIONLESS;

    static LENGTH: NamedSpec = NamedSpec::base("test::length", Dimension::base("L"));
    static WIDTH: NamedSpec = NamedSpec::child("test::width", &LENGTH);
    static RADIUS: NamedSpec = NamedSpec::child("test::radius", &WIDTH);
    static HEIGHT: NamedSpec = NamedSpec::child("test::height", &LENGTH);
    static WAVENUMBER: NamedSpec =
        NamedSpec::child("test::repetency", &LENGTH).is_kind();
    static ANGLE: NamedSpec =
        NamedSpec::child("test::angle", DIMENSIONLESS).is_kind();

    #[test]
    fn paths_and_roots() {
        assert_eq!(hierarchy_path_length(&LENGTH), 0);
        assert_eq!(hierarchy_path_length(&RADIUS), 2);
        assert_eq!(get_hierarchy_root(&RADIUS), &LENGTH);
        assert!(have_common_base(&RADIUS, &HEIGHT));
        assert_eq!(get_common_base(&RADIUS, &HEIGHT), &LENGTH);
        assert_eq!(get_common_base(&RADIUS, &WIDTH), &WIDTH);
    }

    #[test]
    fn children() {
        assert!(is_child_of(&RADIUS, &LENGTH));
        assert!(is_child_of(&RADIUS, &WIDTH));
        assert!(!is_child_of(&WIDTH, &RADIUS));
        assert!(!is_child_of(&HEIGHT, &WIDTH));
        assert!(!is_child_of(&LENGTH, &LENGTH));
    }

    #[test]
    fn kind_roots() {
        assert_eq!(named_kind_tree_root(&RADIUS), &LENGTH);
        assert_eq!(named_kind_tree_root(&WAVENUMBER), &WAVENUMBER);
        let k = get_kind(&SpecInfo::named(&HEIGHT));
        assert!(k.is_kind_of());
        assert_eq!(k.remove_kind(), SpecInfo::named(&LENGTH));
    }

    #[test]
    fn complexity() {
        assert_eq!(named_complexity(&LENGTH), 0);
        assert_eq!(named_complexity(DIMENSIONLESS), 0);
        assert_eq!(named_complexity(&ANGLE), 1);
        assert!(!defines_equation(&ANGLE));
        assert!(defines_equation(&LENGTH));
    }
}
