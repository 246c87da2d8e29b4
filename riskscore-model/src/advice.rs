#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    bmi::Category,
    profile::{Condition, ConditionFlags},
};

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AdviceBundle {
    insight: &'static str,
    lifestyle_tips: &'static [&'static str],
    condition_notes: Vec<&'static str>,
}

impl AdviceBundle {
    pub fn lookup(category: Category, conditions: &ConditionFlags) -> Self {
        Self {
            insight: insight(category),
            lifestyle_tips: lifestyle_tips(category),
            condition_notes: conditions.active().into_iter().map(condition_note).collect(),
        }
    }
    pub fn insight(&self) -> &'static str {
        self.insight
    }
    pub fn lifestyle_tips(&self) -> &[&'static str] {
        self.lifestyle_tips
    }
    pub fn condition_notes(&self) -> &[&'static str] {
        &self.condition_notes
    }
}

pub fn insight(category: Category) -> &'static str {
    match category {
        Category::Underweight => {
            "You may be at risk of nutritional deficiencies. Consider consulting a provider."
        }
        Category::HealthyWeight => "You're in a healthy range. Keep up the good habits!",
        Category::Overweight => {
            "You may benefit from increased physical activity and mindful eating."
        }
        Category::ObeseClassI => {
            "Your weight may be increasing health risks. Consider professional guidance."
        }
        Category::ObeseClassII => {
            "There's a higher risk of chronic conditions. It's important to take action."
        }
        Category::SevereObesityClassIII => {
            "Significant health risks are present. Seek medical support to manage weight safely."
        }
    }
}

pub fn lifestyle_tips(category: Category) -> &'static [&'static str] {
    match category {
        Category::Underweight => &[
            "Eat nutrient-rich meals with healthy fats and protein.",
            "Track your weight and consult a provider for underlying causes.",
        ],
        Category::HealthyWeight => &[
            "Exercise for about 30 minutes a day, 5 days a week.",
            "Monitor your BMI, waist size, and blood pressure once a year.",
        ],
        Category::Overweight => &[
            "Minimize added sugars by choosing water over soft drinks and sweetened juices.",
            "Daily walking (30 minutes) contributes to improved metabolic and heart health.",
            "Clinically recommended: aim to lose 5–10% of body weight within 3–6 months to improve health markers.",
        ],
        Category::ObeseClassI => &[
            "Start meal prepping and increase physical activity to 3x/week.",
            "Consult your doctor about a structured weight management plan.",
        ],
        Category::ObeseClassII => &[
            "Adopt a consistent daily routine for meals and activity.",
            "Track glucose, blood pressure, and cholesterol regularly.",
        ],
        Category::SevereObesityClassIII => &[
            "Consult a medical provider about weight loss options.",
            "Consider clinical programs or support groups for ongoing help.",
        ],
    }
}

pub fn condition_note(condition: Condition) -> &'static str {
    match condition {
        Condition::Hypertension => "Because you have high blood pressure, even a 5–10% weight loss can lower your BP. Reduce sodium, get regular exercise, and track your blood pressure.",
        Condition::Diabetes => "Managing your weight is key for blood sugar control. Increase fiber intake, cut down refined carbs, and monitor glucose regularly.",
        Condition::Smoker => "Quitting smoking improves health. If you’ve recently quit, stay active and choose whole foods to manage post-quit weight gain.",
    }
}
