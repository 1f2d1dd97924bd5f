// Property checks over generated inputs

pub mod common;

use std::sync::Arc;

use quickcheck::{QuickCheck, TestResult};
use structmapper::prelude::*;
use structmapper::BoxError;

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct Profile {
    name: String,
    age: i32,
    score: Option<f64>,
    nickname: Option<String>,
    tags: Vec<String>,
    inner: Option<Inner>,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct Inner {
    flag: bool,
    counts: Vec<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct ProfileMirror {
    name: String,
    age: i32,
    score: Option<f64>,
    nickname: Option<String>,
    tags: Vec<String>,
    inner: Option<InnerMirror>,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct InnerMirror {
    flag: bool,
    counts: Vec<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Mappable)]
struct ProfileSubset {
    age: i64,
    tags: Vec<String>,
}

fn profile(
    name: String,
    age: i32,
    score: Option<f64>,
    nickname: Option<String>,
    tags: Vec<String>,
    inner: Option<(bool, Vec<u16>)>,
) -> Profile {
    Profile {
        name,
        age,
        score,
        nickname,
        tags,
        inner: inner.map(|(flag, counts)| Inner { flag, counts }),
    }
}

#[test]
fn test_identity_projection_property() {
    common::init_logging();

    fn prop(
        name: String,
        age: i32,
        score: Option<f64>,
        nickname: Option<String>,
        tags: Vec<String>,
        inner: Option<(bool, Vec<u16>)>,
    ) -> TestResult {
        if score.is_some_and(f64::is_nan) {
            return TestResult::discard();
        }
        let source = profile(name, age, score, nickname, tags, inner);
        let mapper = Mapper::new();

        let Ok(mirror) = mapper.convert_to::<ProfileMirror>(&source) else {
            return TestResult::failed();
        };
        let Ok(back) = mapper.convert_to::<Profile>(&mirror) else {
            return TestResult::failed();
        };
        TestResult::from_bool(back == source)
    }

    QuickCheck::new().tests(200).quickcheck(
        prop as fn(
            String,
            i32,
            Option<f64>,
            Option<String>,
            Vec<String>,
            Option<(bool, Vec<u16>)>,
        ) -> TestResult,
    );
}

#[test]
fn test_partial_projection_property() {
    fn prop(name: String, age: i32, tags: Vec<String>) -> bool {
        let source = profile(name.clone(), age, None, None, tags.clone(), None);
        let mapper = Mapper::new();

        let Ok(subset) = mapper.convert_to::<ProfileSubset>(&source) else {
            return false;
        };
        let mut target = Profile {
            name: name.clone(),
            ..Profile::default()
        };
        let widened_back = mapper.from(&subset).copy_to(&mut target);

        // i64 does not narrow back into i32 implicitly
        subset.age == i64::from(age)
            && subset.tags == tags
            && widened_back.is_err_and(|err| err.is_no_viable_conversion())
            && target.name == name
    }

    quickcheck::quickcheck(prop as fn(String, i32, Vec<String>) -> bool);
}

#[test]
fn test_cache_consistency_property() {
    fn prop(lookups: Vec<u8>) -> bool {
        let mut mapper = Mapper::new();
        mapper
            .register_fn(|n: &u8| Ok::<_, BoxError>(n.to_string()))
            .register_transformer_fn(
                |pair: &TypePair| pair.from.is::<u16>(),
                |from: &dyn Mappable, to: &TypeInfo| {
                    let mut out = to.construct();
                    out.assign(from.clone_boxed())?;
                    Ok(out)
                },
            );

        let pairs = [
            TypePair::of::<u8, String>(),
            TypePair::of::<u16, u16>(),
            TypePair::of::<u32, String>(),
        ];
        let first: Vec<_> = pairs.iter().map(|pair| mapper.registry().get(pair)).collect();

        lookups.iter().all(|choice| {
            let index = usize::from(*choice) % pairs.len();
            match (mapper.registry().get(&pairs[index]), &first[index]) {
                (Some(found), Some(expected)) => Arc::ptr_eq(&found, expected),
                (None, None) => true,
                _ => false,
            }
        }) && mapper.registry().cached_len() == pairs.len()
    }

    quickcheck::quickcheck(prop as fn(Vec<u8>) -> bool);
}
