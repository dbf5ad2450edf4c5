// SPDX-License-Identifier: MIT

//! Prompt templates for the Gemini model.
//!
//! Both prompts are deterministic string templates embedding the validated
//! profile fields plus fixed output-schema instructions. The schema blocks
//! mirror what the shape validators accept; the validators remain the
//! authority since the model does not always follow instructions.

use crate::models::GenerationRequest;

/// Build the workout plan prompt.
pub fn workout_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You are an experienced fitness coach creating a personalized workout plan based on:
Age: {age}
Height: {height}
Weight: {weight}
Injuries or limitations: {injuries}
Available days for workout: {workout_days}
Fitness goal: {fitness_goal}
Fitness level: {fitness_level}

As a professional coach:
- Consider muscle group splits to avoid overtraining the same muscles on consecutive days
- Design exercises that match the fitness level and account for any injuries
- Structure the workouts to specifically achieve the user's goal

CRITICAL SCHEMA INSTRUCTIONS:
- Your output MUST contain ONLY the fields shown in the example below
- "sets" and "reps" MUST ALWAYS be NUMBERS, never strings
- For example: "sets": 3, "reps": 10
- DO NOT use text like "reps": "As many as possible" or "reps": "To failure"
- NEVER add extra fields to any object

Return a JSON object with this EXACT structure:
{{
  "schedule": ["Monday", "Wednesday", "Friday"],
  "exercises": [
    {{
      "day": "Monday",
      "routines": [
        {{
          "name": "Exercise Name",
          "sets": 3,
          "reps": 10
        }}
      ]
    }}
  ]
}}

Your response must be a valid JSON object with no additional text."#,
        age = request.age,
        height = request.height,
        weight = request.weight,
        injuries = request.injuries,
        workout_days = request.workout_days.join(", "),
        fitness_goal = request.fitness_goal,
        fitness_level = request.fitness_level,
    )
}

/// Build the diet plan prompt.
pub fn diet_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You are an experienced nutrition coach creating a personalized diet plan based on:
Age: {age}
Height: {height}
Weight: {weight}
Fitness goal: {fitness_goal}
Dietary restrictions: {dietary_restrictions}

As a professional nutrition coach:
- Calculate an appropriate daily calorie target based on the person's stats and goal
- Create a balanced set of meals that respects every dietary restriction
- Keep the meals practical, with commonly available foods

CRITICAL SCHEMA INSTRUCTIONS:
- Your output MUST contain ONLY the fields shown in the example below
- "dailyCalories" MUST be a NUMBER, not a string
- DO NOT add fields like "calories", "macros" or "notes" to any object
- "foods" must be a list of plain strings

Return a JSON object with this EXACT structure:
{{
  "dailyCalories": 2000,
  "meals": [
    {{
      "name": "Breakfast",
      "foods": ["Oatmeal with berries", "Greek yogurt"]
    }}
  ]
}}

Your response must be a valid JSON object with no additional text."#,
        age = request.age,
        height = request.height,
        weight = request.weight,
        fitness_goal = request.fitness_goal,
        dietary_restrictions = request.dietary_restrictions.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationRequest;

    fn test_request() -> GenerationRequest {
        GenerationRequest {
            user_id: "user_2abc".to_string(),
            age: 30.0,
            height: "180cm".to_string(),
            weight: "75kg".to_string(),
            injuries: "Left knee".to_string(),
            workout_days: vec!["Monday".to_string(), "Friday".to_string()],
            fitness_goal: "Build Muscle".to_string(),
            fitness_level: "Intermediate".to_string(),
            dietary_restrictions: vec!["vegetarian".to_string()],
        }
    }

    #[test]
    fn test_workout_prompt_embeds_profile() {
        let prompt = workout_prompt(&test_request());
        assert!(prompt.contains("Age: 30"));
        assert!(prompt.contains("Injuries or limitations: Left knee"));
        assert!(prompt.contains("Available days for workout: Monday, Friday"));
        assert!(prompt.contains("\"sets\": 3"));
    }

    #[test]
    fn test_diet_prompt_embeds_restrictions() {
        let prompt = diet_prompt(&test_request());
        assert!(prompt.contains("Dietary restrictions: vegetarian"));
        assert!(prompt.contains("\"dailyCalories\": 2000"));
        // The diet prompt does not mention workout scheduling.
        assert!(!prompt.contains("routines"));
    }
}
