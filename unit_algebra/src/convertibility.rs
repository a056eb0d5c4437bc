/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

use crate::expression::{Expr, Factor, Term};
use crate::hierarchy::{
    defines_equation, expr_complexity, get_common_base, get_hierarchy_root,
    get_kind_tree_root, have_common_base, is_child_of, named_complexity,
    named_kind_tree_root,
};
use crate::quantity_spec::{NamedSpec, SpecInfo};
use crate::ratio::Ratio;
use crate::unit::UnitInfo;

/// How freely a quantity of one spec may become a quantity of another.
/// Ordered from least to most permissive.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug,
)]
pub enum Convertibility {
    No,
    /// Only through `quantity_cast`.
    Cast,
    /// Explicit, leaving the kind of the source.
    ExplicitBeyondKind,
    Explicit,
    /// Implicit.
    Yes,
}

impl Convertibility {
    const fn rank(self) -> u8 {
        match self {
            Convertibility::No => 0,
            Convertibility::Cast => 1,
            Convertibility::ExplicitBeyondKind => 2,
            Convertibility::Explicit => 3,
            Convertibility::Yes => 4,
        }
    }

    pub const fn eq(self, other: Convertibility) -> bool {
        self.rank() == other.rank()
    }

    pub const fn at_least(self, other: Convertibility) -> bool {
        self.rank() >= other.rank()
    }

    pub const fn min(self, other: Convertibility) -> Convertibility {
        match self.rank() <= other.rank() {
            true => self,
            false => other,
        }
    }
}

pub const fn convertible(from: &SpecInfo, to: &SpecInfo) -> Convertibility {
    if from.eq(to) {
        return Convertibility::Yes;
    }
    if !from.dimension().eq(&to.dimension()) {
        return Convertibility::No;
    }
    if from.is_kind_of() || to.is_kind_of() {
        return convertible_kinds(from, to);
    }
    match (from.as_named(), to.as_named()) {
        (Some(f), Some(t)) => convertible_named(f, t),
        _ => ingredients_convertible(*from.expr(), *to.expr()),
    }
}

pub const fn implicitly_convertible(from: &SpecInfo, to: &SpecInfo) -> bool {
    convertible(from, to).eq(Convertibility::Yes)
}

pub const fn explicitly_convertible(from: &SpecInfo, to: &SpecInfo) -> bool {
    convertible(from, to).at_least(Convertibility::ExplicitBeyondKind)
}

pub const fn castable(from: &SpecInfo, to: &SpecInfo) -> bool {
    convertible(from, to).at_least(Convertibility::Cast)
}

pub const fn interconvertible(a: &SpecInfo, b: &SpecInfo) -> bool {
    implicitly_convertible(a, b) && implicitly_convertible(b, a)
}

const fn convertible_kinds(from: &SpecInfo, to: &SpecInfo) -> Convertibility {
    let to_root = get_kind_tree_root(to);
    if from.is_kind_of() {
        let from_root = get_kind_tree_root(from);
        match convertible(&from_root, &to_root) {
            Convertibility::Explicit => Convertibility::Yes,
            res => res,
        }
    } else {
        convertible(from, &to_root)
    }
}

const fn convertible_common_base(from: &NamedSpec, to: &NamedSpec) -> Convertibility {
    if from.eq(to) {
        return Convertibility::Yes;
    }
    let same_kind = named_kind_tree_root(from).eq(named_kind_tree_root(to));
    if is_child_of(from, to) {
        return match same_kind {
            true => Convertibility::Yes,
            false => Convertibility::ExplicitBeyondKind,
        };
    }
    if is_child_of(to, from) {
        return Convertibility::Explicit;
    }
    match same_kind {
        true => Convertibility::Cast,
        false => Convertibility::No,
    }
}

const fn convertible_named(
    from: &'static NamedSpec,
    to: &'static NamedSpec,
) -> Convertibility {
    if have_common_base(from, to) {
        return convertible_common_base(from, to);
    }
    if !named_kind_tree_root(from).eq(named_kind_tree_root(to)) {
        return Convertibility::No;
    }
    let (cf, ct) = (named_complexity(from), named_complexity(to));
    if cf > ct {
        let (exploded, _) = explode_to(Expr::single(Factor::Spec(from), Ratio::ONE), ct);
        convertible(&SpecInfo::from_expr(exploded), &SpecInfo::named(to))
    } else if cf < ct {
        let (exploded, res) = explode_to(Expr::single(Factor::Spec(to), Ratio::ONE), cf);
        res.min(convertible(&SpecInfo::named(from), &SpecInfo::from_expr(exploded)))
    } else {
        Convertibility::No
    }
}

/// Replace the most complex ingredients by their equations until the
/// expression is no more complex than `complexity`.
const fn explode_to(mut expr: Expr, complexity: u32) -> (Expr, Convertibility) {
    let mut res = Convertibility::Yes;
    while expr_complexity(&expr) > complexity {
        let mut best: Option<(usize, u32)> = None;
        let mut pass = 0;
        while pass < 2 {
            let mut i = 0;
            while i < expr.len() {
                let t = expr.term(i);
                if t.power.is_positive() == (pass == 0) {
                    if let Factor::Spec(s) = t.factor {
                        let c = named_complexity(s);
                        match best {
                            Some((_, b)) if b >= c => {}
                            _ => best = Some((i, c)),
                        }
                    }
                }
                i += 1;
            }
            pass += 1;
        }
        let Some((idx, _)) = best else {
            break;
        };
        let Term { factor, power } = expr.term(idx);
        let (equation, step) = match factor {
            Factor::Spec(s) => match explode(s) {
                Some(e) => e,
                None => break,
            },
            _ => break,
        };
        expr = expr.remove(idx).mul(equation.pow(power));
        res = res.min(step);
    }
    (expr, res)
}

const fn explode(spec: &NamedSpec) -> Option<(Expr, Convertibility)> {
    match spec.equation {
        Some(equation) => Some((
            equation,
            match defines_equation(spec) {
                true => Convertibility::Yes,
                false => Convertibility::Explicit,
            },
        )),
        None => None,
    }
}

/// Number of factors in the numerator and in the denominator.
const fn counts(expr: &Expr) -> (usize, usize) {
    let (mut num, mut den) = (0, 0);
    let mut i = 0;
    while i < expr.len() {
        match expr.term(i).power.is_positive() {
            true => num += 1,
            false => den += 1,
        }
        i += 1;
    }
    (num, den)
}

/// Pair the first factors of `from` and `to` (numerators or
/// denominators) that belong to the same hierarchy, and take out the
/// largest common power of the two.
const fn extract_common_base(
    from: &Expr,
    to: &Expr,
    numerators: bool,
) -> Option<(Convertibility, Expr, Expr)> {
    let mut i = 0;
    while i < from.len() {
        let ft = from.term(i);
        if let (Factor::Spec(fs), true) = (ft.factor, ft.power.is_positive() == numerators) {
            let mut j = 0;
            while j < to.len() {
                let tt = to.term(j);
                if let (Factor::Spec(ts), true) =
                    (tt.factor, tt.power.is_positive() == numerators)
                {
                    if get_hierarchy_root(fs).eq(get_hierarchy_root(ts)) {
                        let res = convertible_common_base(fs, ts);
                        if res.eq(Convertibility::No) {
                            return Some((Convertibility::No, *from, *to));
                        }
                        let common = match numerators {
                            true => ft.power.min(tt.power),
                            false => ft.power.neg().min(tt.power.neg()).neg(),
                        };
                        return Some((
                            res,
                            from.mul_term(Term::new(ft.factor, common.neg())),
                            to.mul_term(Term::new(tt.factor, common.neg())),
                        ));
                    }
                }
                j += 1;
            }
        }
        i += 1;
    }
    None
}

#[derive(Clone, Copy)]
enum Side {
    NumFrom,
    DenFrom,
    NumTo,
    DenTo,
}

/// The most complex ingredient; earlier sides win ties.
const fn max_complexity(from: &Expr, to: &Expr) -> Option<(Side, usize, u32)> {
    let sides = [Side::NumFrom, Side::DenFrom, Side::NumTo, Side::DenTo];
    let mut best: Option<(Side, usize, u32)> = None;
    let mut k = 0;
    while k < sides.len() {
        let side = sides[k];
        let (expr, positive) = match side {
            Side::NumFrom => (from, true),
            Side::DenFrom => (from, false),
            Side::NumTo => (to, true),
            Side::DenTo => (to, false),
        };
        let mut i = 0;
        while i < expr.len() {
            let t = expr.term(i);
            if t.power.is_positive() == positive {
                if let Factor::Spec(s) = t.factor {
                    let c = named_complexity(s);
                    match best {
                        Some((_, _, b)) if b >= c => {}
                        _ => best = Some((side, i, c)),
                    }
                }
            }
            i += 1;
        }
        k += 1;
    }
    best
}

const fn ingredients_convertible(from: Expr, to: Expr) -> Convertibility {
    let (num_from, den_from) = counts(&from);
    let (num_to, den_to) = counts(&to);

    if num_from == den_from && num_to + den_to == 0 {
        return Convertibility::Yes;
    }
    if num_from + den_from == 0 && num_to == den_to && num_to >= 1 {
        return Convertibility::Explicit;
    }

    if let Some((res, rest_from, rest_to)) = extract_common_base(&from, &to, true) {
        if res.eq(Convertibility::No) {
            return Convertibility::No;
        }
        return res.min(ingredients_convertible(rest_from, rest_to));
    }
    if let Some((res, rest_from, rest_to)) = extract_common_base(&from, &to, false) {
        if res.eq(Convertibility::No) {
            return Convertibility::No;
        }
        return res.min(ingredients_convertible(rest_from, rest_to));
    }

    let Some((side, idx, complexity)) = max_complexity(&from, &to) else {
        return Convertibility::No;
    };
    let Term { factor, power } = match side {
        Side::NumFrom | Side::DenFrom => from.term(idx),
        Side::NumTo | Side::DenTo => to.term(idx),
    };
    let spec = match factor {
        Factor::Spec(s) => s,
        _ => return Convertibility::No,
    };

    // A lone ingredient may still be a dimensionless quantity.
    match side {
        Side::NumFrom if num_to + den_to == 0 => {
            let res = convertible(&SpecInfo::named(spec), &SpecInfo::DIMENSIONLESS);
            if !res.eq(Convertibility::No) {
                return res.min(ingredients_convertible(from.remove(idx), to));
            }
        }
        Side::NumTo if num_from + den_from == 0 => {
            let res = convertible(&SpecInfo::DIMENSIONLESS, &SpecInfo::named(spec));
            if !res.eq(Convertibility::No) {
                return res.min(ingredients_convertible(from, to.remove(idx)));
            }
        }
        _ => {}
    }

    if complexity == 0 {
        return Convertibility::No;
    }
    let (equation, res) = match explode(spec) {
        Some(e) => e,
        None => return Convertibility::No,
    };
    let equation = equation.pow(power);
    match side {
        Side::NumFrom => ingredients_convertible(from.remove(idx).mul(equation), to),
        Side::DenFrom => {
            res.min(ingredients_convertible(from.remove(idx).mul(equation), to))
        }
        Side::NumTo | Side::DenTo => {
            res.min(ingredients_convertible(from, to.remove(idx).mul(equation)))
        }
    }
}

/// Spec both operands of an addition or comparison convert to
/// implicitly, if any.
pub const fn get_common_quantity_spec(a: &SpecInfo, b: &SpecInfo) -> Option<SpecInfo> {
    if a.eq(b) {
        return Some(*a);
    }
    let ab = implicitly_convertible(a, b);
    let ba = implicitly_convertible(b, a);
    if ab && ba {
        if a.is_kind_of() && !b.is_kind_of() {
            return Some(*b);
        }
        if !a.is_kind_of() && b.is_kind_of() {
            return Some(*a);
        }
        let (na, nb) = (a.remove_kind().is_named(), b.remove_kind().is_named());
        if na && !nb {
            return Some(*a);
        }
        if !na && nb {
            return Some(*b);
        }
        return match Expr::cmp(a.expr(), b.expr()) {
            std::cmp::Ordering::Greater => Some(*b),
            _ => Some(*a),
        };
    }
    if ab {
        return Some(*b);
    }
    if ba {
        return Some(*a);
    }
    if let (Some(na), Some(nb)) = (a.remove_kind().as_named(), b.remove_kind().as_named()) {
        if have_common_base(na, nb) {
            let base = SpecInfo::named(get_common_base(na, nb));
            return match implicitly_convertible(a, &base) && implicitly_convertible(b, &base) {
                true => Some(base),
                false => None,
            };
        }
    }
    let (ra, rb) = (get_kind_tree_root(a), get_kind_tree_root(b));
    if implicitly_convertible(&ra, &rb) {
        Some(rb)
    } else if implicitly_convertible(&rb, &ra) {
        Some(ra)
    } else {
        None
    }
}

/// Whether `unit` may express quantities of `spec`. Units without an
/// associated quantity fit any spec.
pub const fn unit_of(unit: &'static UnitInfo, spec: &SpecInfo) -> bool {
    match unit.quantity_spec() {
        Some(unit_spec) => implicitly_convertible(&unit_spec, spec),
        None => true,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dimension::Dimension;
    use crate::quantity_spec::DIMENSIONLESS;

    static LENGTH: NamedSpec = NamedSpec::base("test::length", Dimension::base("L"));
    static TIME: NamedSpec = NamedSpec::base("test::time", Dimension::base("T"));
    static WIDTH: NamedSpec = NamedSpec::child("test::width", &LENGTH);
    static RADIUS: NamedSpec = NamedSpec::child("test::radius", &WIDTH);
    static HEIGHT: NamedSpec = NamedSpec::child("test::height", &LENGTH);
    static PATH_LENGTH: NamedSpec = NamedSpec::child("test::path_length", &LENGTH);
    static DISTANCE: NamedSpec = NamedSpec::child("test::distance", &PATH_LENGTH);
    static ANGLE: NamedSpec =
        NamedSpec::child("test::angular_measure", DIMENSIONLESS).is_kind();
    static FREQUENCY: NamedSpec = NamedSpec::derived(
        "test::frequency",
        SpecInfo::DIMENSIONLESS.div(SpecInfo::named(&TIME)),
    );
    static SPEED: NamedSpec = NamedSpec::derived(
        "test::speed",
        SpecInfo::named(&LENGTH).div(SpecInfo::named(&TIME)),
    );
    static AREA: NamedSpec = NamedSpec::derived(
        "test::area",
        SpecInfo::named(&LENGTH).pow(Ratio::integer(2)),
    );

    fn named(s: &'static NamedSpec) -> SpecInfo {
        SpecInfo::named(s)
    }

    #[test]
    fn tree_relations() {
        assert_eq!(convertible(&named(&RADIUS), &named(&LENGTH)), Convertibility::Yes);
        assert_eq!(convertible(&named(&LENGTH), &named(&RADIUS)), Convertibility::Explicit);
        assert_eq!(convertible(&named(&RADIUS), &named(&HEIGHT)), Convertibility::Cast);
        assert_eq!(convertible(&named(&DISTANCE), &named(&WIDTH)), Convertibility::Cast);
        assert_eq!(convertible(&named(&LENGTH), &named(&TIME)), Convertibility::No);
    }

    #[test]
    fn kinds() {
        let kind_length = named(&LENGTH).kind_of();
        assert!(implicitly_convertible(&kind_length, &named(&HEIGHT)));
        assert!(implicitly_convertible(&named(&HEIGHT), &kind_length));
        assert_eq!(
            convertible(&named(&ANGLE), &SpecInfo::DIMENSIONLESS),
            Convertibility::ExplicitBeyondKind
        );
        assert!(!implicitly_convertible(&named(&ANGLE).kind_of(), &SpecInfo::DIMENSIONLESS));
    }

    #[test]
    fn equations() {
        let l_per_t = named(&LENGTH).div(named(&TIME));
        assert!(interconvertible(&l_per_t, &named(&SPEED)));
        let area = named(&WIDTH).mul(named(&HEIGHT));
        assert!(implicitly_convertible(&area, &named(&AREA)));
        assert_eq!(convertible(&named(&AREA), &area), Convertibility::Explicit);
        let inverse_time = SpecInfo::DIMENSIONLESS.div(named(&TIME));
        assert!(implicitly_convertible(&named(&FREQUENCY), &inverse_time));
        assert!(!implicitly_convertible(&named(&FREQUENCY), &named(&SPEED)));
    }

    #[test]
    fn dimensionless_ratios() {
        let ratio = named(&HEIGHT).div(named(&WIDTH));
        assert!(implicitly_convertible(&ratio, &SpecInfo::DIMENSIONLESS));
        assert_eq!(
            convertible(&SpecInfo::DIMENSIONLESS, &ratio),
            Convertibility::Explicit
        );
    }

    #[test]
    fn common_specs() {
        let c = get_common_quantity_spec(&named(&RADIUS), &named(&HEIGHT));
        assert_eq!(c, Some(named(&LENGTH)));
        let c = get_common_quantity_spec(&named(&RADIUS), &named(&WIDTH));
        assert_eq!(c, Some(named(&WIDTH)));
        let c = get_common_quantity_spec(&named(&LENGTH).kind_of(), &named(&HEIGHT));
        assert_eq!(c, Some(named(&HEIGHT)));
        let c = get_common_quantity_spec(
            &named(&LENGTH).div(named(&TIME)),
            &named(&SPEED),
        );
        assert_eq!(c, Some(named(&SPEED)));
        assert_eq!(get_common_quantity_spec(&named(&LENGTH), &named(&TIME)), None);
    }

    #[test]
    fn squares_of_siblings_meet_at_the_root() {
        let h2 = named(&HEIGHT).pow(Ratio::integer(2));
        let w2 = named(&WIDTH).pow(Ratio::integer(2));
        assert_eq!(convertible(&h2, &w2), Convertibility::Cast);
        let c = get_common_quantity_spec(&h2, &w2);
        assert_eq!(c, Some(named(&LENGTH).pow(Ratio::integer(2))));
    }
}
