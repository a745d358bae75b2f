//! Builtin benchmark models and their size groups.

use crate::constants::{LARGE, SMALL};
use crate::groups::{ModelGroup, ModelGroups};
use crate::models::{ModelDescriptor, SourceType};

const ARTIFACTS: &str = "https://storage.googleapis.com/iree-model-artifacts";

fn tflite(id: &str, name: &str, tags: &[&str], file: &str, inputs: &[&str]) -> ModelDescriptor {
    ModelDescriptor::new(
        id,
        name,
        tags,
        SourceType::ExportedTflite,
        &format!("{ARTIFACTS}/{file}"),
        "main",
        inputs,
    )
}

#[must_use]
pub fn deeplab_v3_fp32() -> ModelDescriptor {
    tflite("tflite-deeplabv3-fp32", "DeepLabV3_fp32", &["fp32"], "deeplabv3.tflite", &[
        "1x257x257x3xf32",
    ])
}

#[must_use]
pub fn mobile_ssd_fp32() -> ModelDescriptor {
    tflite(
        "tflite-mobilessd-fp32",
        "MobileSSD_fp32",
        &["fp32"],
        "mobile_ssd_v2_float_coco.tflite",
        &["1x320x320x3xf32"],
    )
}

#[must_use]
pub fn posenet_fp32() -> ModelDescriptor {
    tflite("tflite-posenet-fp32", "PoseNet_fp32", &["fp32"], "posenet.tflite", &[
        "1x353x257x3xf32",
    ])
}

#[must_use]
pub fn mobilebert_fp32() -> ModelDescriptor {
    tflite(
        "tflite-mobilebert-fp32",
        "MobileBertSquad_fp32",
        &["fp32"],
        "mobilebert-baseline-tf2-float.tflite",
        &["1x384xi32", "1x384xi32", "1x384xi32"],
    )
}

#[must_use]
pub fn mobilebert_int8() -> ModelDescriptor {
    tflite(
        "tflite-mobilebert-int8",
        "MobileBertSquad_int8",
        &["int8"],
        "mobilebert-baseline-tf2-quant.tflite",
        &["1x384xi32", "1x384xi32", "1x384xi32"],
    )
}

#[must_use]
pub fn mobilebert_fp16() -> ModelDescriptor {
    tflite(
        "tflite-mobilebert-fp16",
        "MobileBertSquad_fp16",
        &["fp32", "demote-f32-to-f16"],
        "mobilebertsquad.tflite",
        &["1x384xi32", "1x384xi32", "1x384xi32"],
    )
}

#[must_use]
pub fn mobilenet_v1() -> ModelDescriptor {
    tflite(
        "tflite-mobilenet-v1",
        "MobileNetV1_fp32",
        &["fp32", "imagenet"],
        "mobilenet_v1_224_1.0_float.tflite",
        &["1x224x224x3xf32"],
    )
}

#[must_use]
pub fn mobilenet_v2() -> ModelDescriptor {
    tflite(
        "tflite-mobilenet-v2",
        "MobileNetV2_fp32",
        &["fp32", "imagenet"],
        "mobilenet_v2_1.0_224.tflite",
        &["1x224x224x3xf32"],
    )
}

#[must_use]
pub fn mobilenet_v3_small() -> ModelDescriptor {
    tflite(
        "tflite-mobilenet-v3small",
        "MobileNetV3Small_fp32",
        &["fp32", "imagenet"],
        "MobileNetV3SmallStaticBatch.tflite",
        &["1x224x224x3xf32"],
    )
}

#[must_use]
pub fn person_detect_int8() -> ModelDescriptor {
    tflite(
        "tflite-person-detect-int8",
        "PersonDetect_int8",
        &["int8"],
        "person_detect.tflite",
        &["1x96x96x1xi8"],
    )
}

#[must_use]
pub fn efficientnet_int8() -> ModelDescriptor {
    tflite(
        "tflite-efficientnet-int8",
        "EfficientNet_int8",
        &["int8"],
        "efficientnet_lite0_int8_2.tflite",
        &["1x224x224x3xui8"],
    )
}

#[must_use]
pub fn minilm_l12_h384_uncased_int32_seqlen128() -> ModelDescriptor {
    ModelDescriptor::new(
        "tf-minilm-l12-h384-uncased-int32-seqlen128",
        "MiniLML12H384Uncased",
        &["int32", "seqlen128"],
        SourceType::ExportedTfV2,
        &format!("{ARTIFACTS}/minilm-l12-h384-uncased-seqlen128-tf-model.tar.gz"),
        "predict",
        &["1x128xi32", "1x128xi32", "1x128xi32"],
    )
}

/// Declared groups of the builtin catalog, in declaration order.
#[must_use]
pub fn builtin_groups() -> ModelGroups {
    ModelGroups::new(vec![
        ModelGroup::new(SMALL, vec![
            deeplab_v3_fp32(),
            mobile_ssd_fp32(),
            posenet_fp32(),
            mobilebert_fp32(),
            mobilebert_int8(),
            mobilebert_fp16(),
            mobilenet_v1(),
            mobilenet_v2(),
            mobilenet_v3_small(),
            person_detect_int8(),
            efficientnet_int8(),
        ]),
        ModelGroup::new(LARGE, vec![minilm_l12_h384_uncased_int32_seqlen128()]),
    ])
}
